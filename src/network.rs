//! IPv4 and IPv6 address masks.
//!
//! Both work on the raw input rather than on a cleaned value: the dots and
//! colons the user types are what delimit the groups.

/// Groups in an IPv4 address.
pub const IPV4_GROUPS: usize = 4;

/// Digits per IPv4 group.
pub const IPV4_GROUP_DIGITS: usize = 3;

/// Groups in an IPv6 address.
pub const IPV6_GROUPS: usize = 8;

/// Hex digits per IPv6 group.
pub const IPV6_GROUP_DIGITS: usize = 4;

/// Renders an IPv4 address.
///
/// The input is split on `.`; each of the first four parts is reduced to at
/// most three digits. An empty part is kept as an empty placeholder only when
/// more parts follow it, so typing without dots never creates new groups.
///
/// # Example
///
/// ```
/// use keymask::network::render_ipv4;
///
/// assert_eq!(render_ipv4("192.168.1.1"), "192.168.1.1");
/// assert_eq!(render_ipv4("19216811"), "192");
/// assert_eq!(render_ipv4("1921.16800.1.1.5"), "192.168.1.1");
/// ```
pub fn render_ipv4(raw: &str) -> String {
    let parts: Vec<&str> = raw.split('.').collect();
    let mut groups: Vec<String> = Vec::with_capacity(IPV4_GROUPS);

    for i in 0..IPV4_GROUPS {
        match parts.get(i) {
            Some(part) if !part.is_empty() => groups.push(
                part.chars()
                    .filter(char::is_ascii_digit)
                    .take(IPV4_GROUP_DIGITS)
                    .collect(),
            ),
            _ if i + 1 < parts.len() => groups.push(String::new()),
            _ => {}
        }
    }

    groups.join(".")
}

/// Renders an IPv6 address.
///
/// Everything except hex digits and `:` is dropped and letters are
/// uppercased. The first eight `:`-separated parts are each cut to four hex
/// digits and left-padded with zeros; missing or empty parts contribute
/// nothing, but all seven separators are always written.
///
/// # Example
///
/// ```
/// use keymask::network::render_ipv6;
///
/// assert_eq!(
///     render_ipv6("2001:db8:85a3:0:0:8a2e:370:7334"),
///     "2001:0DB8:85A3:0000:0000:8A2E:0370:7334"
/// );
/// assert_eq!(render_ipv6("fe80"), "FE80:::::::");
/// ```
pub fn render_ipv6(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_hexdigit() || *c == ':')
        .map(|c| c.to_ascii_uppercase())
        .collect();
    let parts: Vec<&str> = cleaned.split(':').collect();

    let mut result = String::with_capacity(IPV6_GROUPS * (IPV6_GROUP_DIGITS + 1));
    for i in 0..IPV6_GROUPS {
        if i > 0 {
            result.push(':');
        }
        if let Some(part) = parts.get(i).filter(|p| !p.is_empty()) {
            let group = &part[..part.len().min(IPV6_GROUP_DIGITS)];
            for _ in group.len()..IPV6_GROUP_DIGITS {
                result.push('0');
            }
            result.push_str(group);
        }
    }
    result
}
