//! Resolved translation options.

/// Layout of generated header files on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderLayout {
    /// Mirror the source package structure, one directory per package
    /// segment: `java.util.List` is found at `java/util/List.h`.
    #[default]
    PackageDirectories,
    /// Emit every header into a single flat directory, keeping only the
    /// trailing simple name: `com.example.Foo` is found at `Foo.h`.
    Flat,
}

/// Resolved, validated options consumed by the translation pipeline.
///
/// Produced from a [`crate::config::RawConfig`], or built directly in
/// tests. Cheap to copy; passed by value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub header_layout: HeaderLayout,
}
