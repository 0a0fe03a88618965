//! Filters for writing instruction tests: byte extension, hex and key
//! selection.

use minijinja::value::{Value, ValueKind};
use minijinja::{Error, ErrorKind};

/// `v | ext0`: the low eight bits, zero extended.
pub fn ext0(value: i64) -> i64 {
    value & 0xff
}

/// `v | ext1`: every bit above bit 7 set, so an 8-bit pattern reads as the
/// negative number it encodes.
pub fn ext1(value: i64) -> i64 {
    value | !0xff
}

/// `v | hex`: lowercase hex with a `0x` prefix. Negative numbers keep their
/// sign in front of the prefix, `-0x1`.
pub fn hex(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    format!("{sign}0x{:x}", value.unsigned_abs())
}

/// `mapping | selectkeys(keys)`: the entries of `mapping` whose key is in
/// `keys`, in the order of `mapping`.
pub fn selectkeys(value: &Value, keys: &Value) -> Result<Value, Error> {
    if value.kind() != ValueKind::Map {
        return Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("selectkeys expects a mapping, got {}", value.kind()),
        ));
    }
    let keys: Vec<Value> = keys.try_iter()?.collect();

    let mut selected = Vec::new();
    for key in value.try_iter()? {
        if keys.contains(&key) {
            let item = value.get_item(&key)?;
            selected.push((key, item));
        }
    }
    Ok(Value::from_iter(selected))
}
