//! IPv6 text validation.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Accepted IPv6 grammar: up to eight hextets, at most one `::`, an
    /// optional trailing embedded IPv4 literal and an optional `%zone`
    /// suffix. Slightly permissive by design; not an RFC-complete grammar.
    static ref IPV6_RE: Regex = Regex::new(
        r"(?x)^[\s]*(
        (([0-9A-Fa-f]{1,4}:){7}([0-9A-Fa-f]{1,4}|:))
        |(([0-9A-Fa-f]{1,4}:){6}(:[0-9A-Fa-f]{1,4}|((25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)(\.(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)){3})|:))
        |(([0-9A-Fa-f]{1,4}:){5}(((:[0-9A-Fa-f]{1,4}){1,2})|:((25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)(\.(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)){3})|:))
        |(([0-9A-Fa-f]{1,4}:){4}(((:[0-9A-Fa-f]{1,4}){1,3})|((:[0-9A-Fa-f]{1,4})?:((25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)(\.(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)){3}))|:))
        |(([0-9A-Fa-f]{1,4}:){3}(((:[0-9A-Fa-f]{1,4}){1,4})|((:[0-9A-Fa-f]{1,4}){0,2}:((25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)(\.(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)){3}))|:))
        |(([0-9A-Fa-f]{1,4}:){2}(((:[0-9A-Fa-f]{1,4}){1,5})|((:[0-9A-Fa-f]{1,4}){0,3}:((25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)(\.(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)){3}))|:))
        |(([0-9A-Fa-f]{1,4}:){1}(((:[0-9A-Fa-f]{1,4}){1,6})|((:[0-9A-Fa-f]{1,4}){0,4}:((25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)(\.(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)){3}))|:))
        |(:(((:[0-9A-Fa-f]{1,4}){1,7})|((:[0-9A-Fa-f]{1,4}){0,5}:((25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)(\.(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)){3}))|:))
        )(%.+)?[\s]*$"
    )
    .expect("Invalid Regex");
}

/// Validate an IPv6 address string.
pub fn is_valid_ip(ip: &str) -> bool {
    IPV6_RE.is_match(ip)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_ip() {
        assert!(is_valid_ip("::"));
        assert!(is_valid_ip("1::"));
        assert!(is_valid_ip("0::"));
        assert!(is_valid_ip("::1"));
        assert!(is_valid_ip("::0"));
        assert!(is_valid_ip("1::1"));
        assert!(is_valid_ip("1::0:1"));
        assert!(is_valid_ip("0:0:0:0:0:0:0:0"));
        assert!(is_valid_ip("0000:0000:0000:0000:0000:0000:0000:0000"));
        assert!(is_valid_ip("ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"));
        assert!(is_valid_ip("f16c:f7ec:cfa2:e1c5:9a3c:cb08:801f:36b8"));

        assert!(!is_valid_ip("1:::1"));
        assert!(!is_valid_ip("g001:db8:f29f::2f4e"));
        assert!(!is_valid_ip("-111:db8:f29f::2f4e"));
        assert!(!is_valid_ip("0000:0000:0000:0000:0000:0000:0000"));
        assert!(!is_valid_ip("ffff:ffff:ffff:ffff:ffff:ffff:ffff"));
        assert!(!is_valid_ip("192.168.1.1"));
    }

    #[test]
    fn test_embedded_ipv4() {
        assert!(is_valid_ip("::192.168.1.1"));
        assert!(is_valid_ip("::ffff:192.168.1.1"));
        assert!(is_valid_ip("1::192.168.1.1"));
        assert!(!is_valid_ip("::255.255.255.288"));
        assert!(!is_valid_ip("1::192.168.1.1:2"));
    }

    #[test]
    fn test_zone_suffix_accepted() {
        assert!(is_valid_ip("fe80::1%eth0"));
        assert!(is_valid_ip("fe80::1%25en1"));
    }
}
