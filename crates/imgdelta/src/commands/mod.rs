mod diff;

pub use self::diff::diff;
