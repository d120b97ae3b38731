//! Call-site provenance
//!
//! File, function and line of a log call, used only for display.
//! The logging macros capture these automatically; use [`call_site!`]
//! when calling the [`Logger`](crate::Logger) methods directly.

/// Where a log call was made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
    pub file: &'a str,
    pub function: &'a str,
    pub line: u32,
}

impl<'a> CallSite<'a> {
    pub const fn new(file: &'a str, function: &'a str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }

    /// Last path component of `file` without its extension
    pub fn file_stem(&self) -> &'a str {
        let name = self
            .file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file);
        match name.rfind('.') {
            Some(0) | None => name,
            Some(dot) => &name[..dot],
        }
    }

    /// Innermost named function, skipping closure frames
    pub fn function_name(&self) -> &'a str {
        short_function_name(self.function)
    }
}

/// Reduce a full `type_name` path such as `app::net::connect::{{closure}}`
/// to `connect`
pub fn short_function_name(path: &str) -> &str {
    path.rsplit("::")
        .find(|segment| !segment.is_empty() && *segment != "{{closure}}")
        .unwrap_or(path)
}

/// Full path of the enclosing function, e.g. `my_crate::net::connect`
///
/// Only the path is available: no parameter list or labels, and closures show
/// up as `{{closure}}` segments. [`CallSite::function_name`] keeps the bare
/// name of the innermost named function (`connect`).
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __type_name_of(__here);
        name.strip_suffix("::__here").unwrap_or(name)
    }};
}

/// Capture the current file, function and line as a [`CallSite`]
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(::std::file!(), $crate::function_name!(), ::std::line!())
    };
}
