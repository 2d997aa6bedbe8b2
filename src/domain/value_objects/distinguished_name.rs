//! Distinguished name value object
//!
//! A directory path such as `OU=Compta,OU=Xanadu,DC=xanadu,DC=local`,
//! ordered leaf-first. The parent of a container is always derived by
//! dropping the leading RDN; nothing here owns a tree.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{XanaduError, XanaduResult};

/// Characters that must be backslash-escaped inside an RDN value.
const SPECIAL: &[char] = &[',', '+', '"', '\\', '<', '>', ';', '='];

/// Fully-qualified directory path, leaf RDN first.
///
/// Equality and hashing ignore ASCII case, as Active Directory does.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DistinguishedName {
    rdns: Vec<String>,
}

impl DistinguishedName {
    /// Parse a DN, honouring backslash-escaped separators.
    pub fn parse(input: &str) -> XanaduResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(invalid(input, "empty"));
        }

        let mut rdns = Vec::new();
        for part in split_unescaped(trimmed) {
            let part = part.trim();
            validate_rdn(part).map_err(|reason| invalid(input, reason))?;
            rdns.push(part.to_string());
        }

        Ok(Self { rdns })
    }

    /// Path of a child: `attr=value` prepended to this path.
    pub fn child(&self, attr: &str, value: &str) -> Self {
        let mut rdns = Vec::with_capacity(self.rdns.len() + 1);
        rdns.push(format!("{}={}", attr, escape_value(value)));
        rdns.extend(self.rdns.iter().cloned());
        Self { rdns }
    }

    /// Path of an organizational unit directly below this one.
    pub fn child_ou(&self, name: &str) -> Self {
        self.child("OU", name)
    }

    /// Path without its leading RDN, `None` for a single-RDN path.
    pub fn parent(&self) -> Option<Self> {
        if self.rdns.len() <= 1 {
            return None;
        }
        Some(Self {
            rdns: self.rdns[1..].to_vec(),
        })
    }

    /// Unescaped value of the leading RDN (`Compta` for `OU=Compta,...`).
    pub fn leaf_name(&self) -> String {
        let (_, value) = self.rdns[0]
            .split_once('=')
            .unwrap_or(("", self.rdns[0].as_str()));
        unescape_value(value.trim())
    }

    /// Attribute type of the leading RDN, upper-cased (`OU`, `CN`, `DC`).
    pub fn leaf_attribute(&self) -> String {
        let (attr, _) = self.rdns[0].split_once('=').unwrap_or(("", ""));
        attr.trim().to_ascii_uppercase()
    }

    /// Number of RDNs in the path.
    pub fn depth(&self) -> usize {
        self.rdns.len()
    }

    /// True when `self` is `other` or lies below it.
    pub fn is_within(&self, other: &DistinguishedName) -> bool {
        if self.rdns.len() < other.rdns.len() {
            return false;
        }
        let offset = self.rdns.len() - other.rdns.len();
        self.rdns[offset..]
            .iter()
            .zip(&other.rdns)
            .all(|(a, b)| a.eq_ignore_ascii_case(b))
    }

    fn normalized(&self) -> String {
        self.to_string().to_ascii_lowercase()
    }
}

impl PartialEq for DistinguishedName {
    fn eq(&self, other: &Self) -> bool {
        self.rdns.len() == other.rdns.len()
            && self
                .rdns
                .iter()
                .zip(&other.rdns)
                .all(|(a, b)| a.eq_ignore_ascii_case(b))
    }
}

impl Eq for DistinguishedName {}

impl Hash for DistinguishedName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl fmt::Display for DistinguishedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rdns.join(","))
    }
}

impl std::str::FromStr for DistinguishedName {
    type Err = XanaduError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DistinguishedName {
    type Error = XanaduError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DistinguishedName> for String {
    fn from(dn: DistinguishedName) -> Self {
        dn.to_string()
    }
}

fn invalid(input: &str, reason: &'static str) -> XanaduError {
    XanaduError::InvalidDistinguishedName {
        dn: input.to_string(),
        reason,
    }
}

fn split_unescaped(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            ',' => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&s[start..]);
    parts
}

fn validate_rdn(rdn: &str) -> Result<(), &'static str> {
    let (attr, value) = rdn.split_once('=').ok_or("RDN is missing '='")?;
    if attr.trim().is_empty() {
        return Err("RDN has an empty attribute type");
    }
    if value.trim().is_empty() {
        return Err("RDN has an empty value");
    }
    if value.ends_with('\\') && !value.ends_with("\\\\") {
        return Err("RDN ends with a dangling escape");
    }
    Ok(())
}

fn escape_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if SPECIAL.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Undo `\c` and `\XX` (hex byte) escapes.
fn unescape_value(value: &str) -> String {
    let mut bytes = Vec::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            let mut buf = [0; 4];
            bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            continue;
        }
        let Some(next) = chars.next() else {
            break;
        };
        let hex_pair = next
            .to_digit(16)
            .zip(chars.peek().and_then(|c| c.to_digit(16)));
        match hex_pair {
            Some((high, low)) => {
                chars.next();
                bytes.push((high * 16 + low) as u8);
            }
            None => {
                let mut buf = [0; 4];
                bytes.extend_from_slice(next.encode_utf8(&mut buf).as_bytes());
            }
        }
    }
    String::from_utf8_lossy(&bytes).into_owned()
}
