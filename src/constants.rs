//! Fixed values injected into every render.

/// File name sentinel for standard input and standard output.
pub const STDIO_SENTINEL: &str = "-";

/// Render parameter `base1`: first base address used by test sources.
pub const BASE1: i64 = 0x1234;

/// Render parameter `base2`: second base address used by test sources.
pub const BASE2: i64 = 0x5678;

/// Status register flag masks as `(global name, bit)`.
pub const FLAG_BITS: &[(&str, u32)] = &[("V", 8), ("N", 2), ("Z", 1), ("C", 0)];

/// Extension given to the infile name to form the default make target.
pub const TARGET_EXTENSION: &str = "S";

/// Extension of the default dependency file under `-MD`.
pub const DEPFILE_EXTENSION: &str = "d";

/// Name the template read from standard input is registered under.
pub const STDIN_TEMPLATE: &str = "<stdin>";
