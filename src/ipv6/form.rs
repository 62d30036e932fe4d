//! IPv6 canonical expansion and compression.

use crate::error::{IpError, Result};
use crate::ipv4;
use crate::ipv6::is_valid_ip;
use itertools::Itertools;

/// Expand an IPv6 address string into its full eight-hextet form.
///
/// The `::` marker is replaced by the exact number of `0000` groups needed
/// to reach eight, each group is left-padded to four lowercase hex digits,
/// and a trailing embedded IPv4 literal becomes its two hextets. A `%zone`
/// suffix is accepted and dropped.
pub fn expanded_form(ip: &str) -> Result<String> {
    if !is_valid_ip(ip) {
        return Err(IpError::InvalidFormat(format!("invalid IPv6 address: {ip}")));
    }
    let ip = ip.trim();
    let ip = ip.split('%').next().unwrap_or(ip);

    // Splice a trailing dotted quad into its two hextets first.
    let mut text = ip.to_string();
    if let Some(idx) = text.rfind(':') {
        let last = &text[idx + 1..];
        if last.contains('.') {
            let long = ipv4::ip2long(last)?;
            text = format!("{}:{:x}:{:x}", &text[..idx], long >> 16, long & 0xffff);
        }
    }

    let expand = |group: &str| format!("{:0>4}", group.to_lowercase());
    let full: Vec<String> = match text.split_once("::") {
        Some((left, right)) => {
            let left: Vec<&str> = left.split(':').filter(|s| !s.is_empty()).collect();
            let right: Vec<&str> = right.split(':').filter(|s| !s.is_empty()).collect();
            let zeros = 8usize.checked_sub(left.len() + right.len()).ok_or_else(|| {
                IpError::InvalidFormat(format!("too many hextets: {ip}"))
            })?;
            left.iter()
                .map(|group| expand(group))
                .chain(std::iter::repeat("0000".to_string()).take(zeros))
                .chain(right.iter().map(|group| expand(group)))
                .collect()
        }
        None => text.split(':').map(expand).collect(),
    };
    if full.len() != 8 {
        return Err(IpError::InvalidFormat(format!("invalid IPv6 address: {ip}")));
    }

    Ok(full.join(":"))
}

/// Compress an IPv6 address string into its canonical shortest form.
///
/// Idempotent: compressing an already-compressed form yields the same text.
pub fn compressed_form(ip: &str) -> Result<String> {
    let expanded = expanded_form(ip)?;
    let groups: Vec<u16> = expanded
        .split(':')
        .map(|group| {
            u16::from_str_radix(group, 16)
                .map_err(|_| IpError::InvalidFormat(format!("invalid hextet: {group}")))
        })
        .collect::<Result<_>>()?;
    Ok(compress_groups(&groups))
}

/// Render eight hextets in canonical compressed form.
///
/// Elides the longest run of two or more zero groups, preferring the
/// leftmost run on a length tie; a lone zero group is never elided. The
/// all-zero value renders as `::`.
pub(crate) fn compress_groups(groups: &[u16]) -> String {
    let mut best: Option<(usize, usize)> = None; // (start, len)
    let mut i = 0;
    while i < groups.len() {
        if groups[i] == 0 {
            let start = i;
            while i < groups.len() && groups[i] == 0 {
                i += 1;
            }
            let len = i - start;
            if len >= 2 && best.map_or(true, |(_, best_len)| len > best_len) {
                best = Some((start, len));
            }
        } else {
            i += 1;
        }
    }

    match best {
        Some((start, len)) => {
            let left = groups[..start].iter().map(|g| format!("{g:x}")).join(":");
            let right = groups[start + len..]
                .iter()
                .map(|g| format!("{g:x}"))
                .join(":");
            format!("{left}::{right}")
        }
        None => groups.iter().map(|g| format!("{g:x}")).join(":"),
    }
}
