use core::fmt::Write;

use compact_str::CompactString;

/// Where a log call was made.
///
/// Every field is optional; absent parts turn into empty segments in
/// [`CallSite::prefix`]. Use [`call_site!`](crate::call_site) to fill all three
/// from the calling context.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CallSite<'a> {
    pub file: Option<&'a str>,
    pub function: Option<&'a str>,
    pub line: Option<u32>,
}

impl<'a> CallSite<'a> {

    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            file: None,
            function: None,
            line: None,
        }
    }

    #[inline(always)]
    pub const fn from_parts(file: &'a str, function: &'a str, line: u32) -> Self {
        Self {
            file: Some(file),
            function: Some(function),
            line: Some(line),
        }
    }

    /// File and line of the caller. The function segment stays empty.
    #[track_caller]
    #[inline(always)]
    pub fn caller() -> CallSite<'static> {
        let loc = core::panic::Location::caller();
        CallSite {
            file: Some(loc.file()),
            function: None,
            line: Some(loc.line()),
        }
    }

    #[inline(always)]
    pub fn with_file(mut self, file: &'a str) -> Self {
        self.file = Some(file);
        self
    }

    #[inline(always)]
    pub fn with_function(mut self, function: &'a str) -> Self {
        self.function = Some(function);
        self
    }

    #[inline(always)]
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Builds `<file>.<function>[<line>]:`.
    pub fn prefix(&self) -> CompactString {
        let mut prefix = CompactString::default();
        prefix.push_str(file_name(self.file));
        prefix.push('.');
        prefix.push_str(function_name(self.function));
        if let Some(line) = self.line {
            // writing into a CompactString can't fail
            let _ = write!(prefix, "[{}]", line);
        }
        prefix.push(':');
        prefix
    }
}

/// Base name of `path` up to its first `.`.
pub fn file_name(path: Option<&str>) -> &str {
    let Some(path) = path else {
        return ""
    };
    let path = path.trim_end_matches(['/', '\\']);
    let base = path.rsplit(['/', '\\']).next().unwrap_or(path);
    base.split('.').next().unwrap_or(base)
}

/// Bare function name: everything before the first `(`, without module path
/// or closure segments.
pub fn function_name(name: Option<&str>) -> &str {
    let Some(name) = name else {
        return ""
    };
    let name = name.split('(').next().unwrap_or(name);
    name
        .rsplit("::")
        .find(|segment| *segment != "{{closure}}")
        .unwrap_or("")
}

/// Path of the enclosing function, e.g. `my_app::view::render`.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let name = type_name_of(f);
        name.strip_suffix("::f").unwrap_or(name)
    }};
}

/// [`CallSite`] of the macro invocation.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::from_parts(file!(), $crate::function_name!(), line!())
    };
}
