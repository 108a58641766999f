//! Move global options in front of the subcommand so they may be written anywhere.

use std::ffi::OsStr;

/// Global options that take a value (`--config x.yml`, `-c x.yml`, `--config=x.yml`).
const VALUE_OPTIONS: [&str; 2] = ["--config", "-c"];
/// Global options without a value.
const FLAG_OPTIONS: [&str; 4] = ["--verbose", "-v", "--version", "-V"];

/// Reorder raw arguments (program name excluded) as hoisted global options followed by
/// everything else. Both groups keep their original relative order.
///
/// `search foo --verbose` becomes `--verbose search foo`. A bare value option also hoists the
/// token after it, so `-c` following a subcommand is always read as the config path.
pub fn hoist_global_options<T: AsRef<OsStr> + Clone>(argv: &[T]) -> Vec<T> {
    let mut hoisted = Vec::new();
    let mut rest = Vec::new();

    let mut args = argv.iter();
    while let Some(arg) = args.next() {
        let os = arg.as_ref();
        if is_value_option_with_inline_value(os) {
            hoisted.push(arg.clone());
        } else if VALUE_OPTIONS.iter().any(|opt| os == OsStr::new(opt)) {
            hoisted.push(arg.clone());
            if let Some(value) = args.next() {
                hoisted.push(value.clone());
            }
        } else if FLAG_OPTIONS.iter().any(|opt| os == OsStr::new(opt)) {
            hoisted.push(arg.clone());
        } else {
            rest.push(arg.clone());
        }
    }

    hoisted.extend(rest);
    hoisted
}

fn is_value_option_with_inline_value(arg: &OsStr) -> bool {
    // Compared on raw bytes so non-UTF-8 paths still hoist.
    let bytes = arg.as_encoded_bytes();
    VALUE_OPTIONS.iter().any(|opt| {
        bytes
            .strip_prefix(opt.as_bytes())
            .is_some_and(|tail| tail.first() == Some(&b'='))
    })
}
