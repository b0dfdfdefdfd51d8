use crate::model::PartKind;

/// The assembly steps a [`Director`](crate::director::Director) can drive.
///
/// # Architecture Note
/// The director only knows *which* steps to run and in what order. *How* a step
/// is carried out belongs to the implementor. [`Builder`](super::Builder) is the
/// standard implementation; tests and callers may plug in their own.
///
/// # Provided Methods
/// - [`PartBuilder::build`] dispatches a [`PartKind`] to the matching step.
///
/// Implementors must not reset their product from any of these methods. Reset
/// only happens on extraction.
pub trait PartBuilder {
    fn build_part_a(&mut self);

    fn build_part_b(&mut self);

    fn build_part_c(&mut self);

    /// Runs the step for `kind`.
    fn build(&mut self, kind: PartKind) {
        match kind {
            PartKind::A => self.build_part_a(),
            PartKind::B => self.build_part_b(),
            PartKind::C => self.build_part_c(),
        }
    }
}
