pub mod watcher;

pub use self::watcher::Watcher;
