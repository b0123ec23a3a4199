use std::collections::HashSet;

/// Immutable set of accepted root domains.
///
/// Keys are lowercase and always fully qualified (trailing dot). The set is
/// built once at startup and shared read-only by every query.
#[derive(Debug, Clone, Default)]
pub struct SuffixSet {
    domains: HashSet<String>,
}

impl SuffixSet {
    /// Builds the set from configured domain names.
    ///
    /// Blank entries are skipped, surrounding whitespace is trimmed and a
    /// missing root dot is appended (`"example.com"` becomes `"example.com."`).
    pub fn from_domains<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let domains = domains
            .into_iter()
            .filter_map(|d| normalize_domain(d.as_ref()))
            .collect();
        Self { domains }
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Case-insensitive membership test for a fully-qualified name.
    pub fn contains(&self, fqdn: &str) -> bool {
        self.domains.contains(&fqdn.to_ascii_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(String::as_str)
    }

    /// Strips the first accepted suffix found while walking label boundaries
    /// from the left, and returns the payload in front of it.
    ///
    /// A name equal to an accepted suffix yields an empty payload. `None`
    /// means no boundary of `fqdn` starts an accepted suffix.
    pub fn trim<'a>(&self, fqdn: &'a str) -> Option<&'a str> {
        // ASCII lowercasing keeps byte offsets, so boundaries found on the
        // folded copy slice the original name.
        let folded = fqdn.to_ascii_lowercase();
        let mut offset = 0;
        loop {
            if self.domains.contains(&folded[offset..]) {
                return Some(if offset > 0 { &fqdn[..offset - 1] } else { "" });
            }
            offset = next_label(fqdn, offset)?;
        }
    }
}

/// Returns the start of the label after the one at `offset`, or `None` once
/// the final label is reached. Escaped dots (`\.`) do not split labels.
fn next_label(name: &str, offset: usize) -> Option<usize> {
    let bytes = name.as_bytes();
    let mut i = offset;
    while i + 1 < bytes.len() {
        if bytes[i] == b'.' {
            let escapes = bytes[..i].iter().rev().take_while(|&&b| b == b'\\').count();
            if escapes % 2 == 0 {
                return Some(i + 1);
            }
        }
        i += 1;
    }
    None
}

fn normalize_domain(domain: &str) -> Option<String> {
    let domain = domain.trim();
    if domain.is_empty() {
        return None;
    }
    let mut fqdn = domain.to_ascii_lowercase();
    if !fqdn.ends_with('.') {
        fqdn.push('.');
    }
    Some(fqdn)
}
