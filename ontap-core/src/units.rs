//! Unit conversions
//!
//! ONTAP reports every size in bytes and every duration as an ISO-8601
//! duration string.

pub const KIB: u64 = 1024;
pub const MIB: u64 = KIB * 1024;
pub const GIB: u64 = MIB * 1024;
pub const TIB: u64 = GIB * 1024;

pub fn bytes_to_mib(bytes: u64) -> f64 {
    bytes as f64 / MIB as f64
}

pub fn bytes_to_gib(bytes: u64) -> f64 {
    bytes as f64 / GIB as f64
}

/// Convert a limit given in TiB to bytes, `None` on overflow
pub fn tib_to_bytes(tib: u64) -> Option<u64> {
    tib.checked_mul(TIB)
}

/// Parse an ISO-8601 duration (`P[nW][nD][T[nH][nM][n[.f]S]]`) into whole seconds
///
/// Year and month designators are rejected since they have no fixed length.
/// Fractional seconds are truncated.
pub fn parse_iso8601_duration(input: &str) -> Option<u64> {
    let rest = input.strip_prefix('P')?;
    if rest.is_empty() {
        return None;
    }

    let mut total: u64 = 0;
    let mut in_time = false;
    let mut time_parts = 0;
    let mut number = String::new();

    for c in rest.chars() {
        match c {
            'T' if !in_time && number.is_empty() => in_time = true,
            '0'..='9' | '.' => number.push(c),
            designator => {
                if number.is_empty() {
                    return None;
                }
                let unit = match (designator, in_time) {
                    ('W', false) => 7 * 86_400,
                    ('D', false) => 86_400,
                    ('H', true) => 3_600,
                    ('M', true) => 60,
                    ('S', true) => 1,
                    _ => return None,
                };
                let whole = match number.split_once('.') {
                    Some((whole, _)) if designator == 'S' => whole,
                    Some(_) => return None,
                    None => number.as_str(),
                };
                let value: u64 = whole.parse().ok()?;
                total = total.checked_add(value.checked_mul(unit)?)?;
                if in_time {
                    time_parts += 1;
                }
                number.clear();
            }
        }
    }

    // `T` must be followed by at least one time component
    if in_time && time_parts == 0 {
        return None;
    }
    number.is_empty().then_some(total)
}
