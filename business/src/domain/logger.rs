/// Logging port used by the store and the dispatcher.
///
/// Infrastructure provides the implementation so the domain stays free of
/// any particular logging backend.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
