/// Represents an application event.
pub trait Event: Clone {}
