/// Observer for clear-icon activations.
///
/// `before_text_cleared` runs once the tap is accepted, while the field still
/// holds its text; `after_text_cleared` runs immediately after the field has
/// been emptied. A field holds at most one listener; registering a new one
/// replaces the old.
pub trait ClearedListener {
    fn before_text_cleared(&mut self, text: &str);
    fn after_text_cleared(&mut self);
}

/// A plain record of two callbacks, for callers that do not want to write a
/// dedicated listener type.
pub struct ClearedHooks<B, A> {
    before: B,
    after: A,
}

impl<B, A> ClearedHooks<B, A>
where
    B: FnMut(&str),
    A: FnMut(),
{
    pub fn new(before: B, after: A) -> Self {
        Self { before, after }
    }
}

impl<B, A> ClearedListener for ClearedHooks<B, A>
where
    B: FnMut(&str),
    A: FnMut(),
{
    fn before_text_cleared(&mut self, text: &str) {
        (self.before)(text);
    }

    fn after_text_cleared(&mut self) {
        (self.after)();
    }
}
