pub mod watchers;
