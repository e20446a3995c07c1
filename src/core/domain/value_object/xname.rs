//! Translation between node xnames and the xnames of their BMCs.
//!
//! A node xname encodes its physical position as a sequence of ordinals:
//! cabinet `x`, chassis `c`, slot `s`, BMC `b` and node `n`, for example
//! `x1000c1s7b0n1`. The BMC owning that node is the same xname with the node
//! ordinal dropped (`x1000c1s7b0`).

use crate::core::domain::error::ValidationError;

/// Ordinal prefixes of a node xname, in order.
const NODE_ORDINALS: [char; 5] = ['x', 'c', 's', 'b', 'n'];

/// The ordinal that terminates a BMC xname.
const BMC_ORDINAL: char = 'b';

/// Outcome of translating a node xname into a BMC xname.
///
/// Translation never fails: when the node xname does not follow the naming
/// convention the node xname itself is used and the reason is kept so the
/// caller can report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XnameTranslation {
    bmc_xname: String,
    fallback: Option<ValidationError>,
}

impl XnameTranslation {
    /// The BMC xname to use for the node.
    pub fn bmc_xname(&self) -> &str {
        &self.bmc_xname
    }

    /// Returns true if the node xname was used as-is.
    pub fn used_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Why the convention did not apply, if it did not.
    pub fn fallback_reason(&self) -> Option<&ValidationError> {
        self.fallback.as_ref()
    }
}

/// Derives the BMC xname for a node xname, falling back to the node xname.
///
/// # Examples
///
/// ```
/// use inventory_discovery::translate;
///
/// let translation = translate("x1000c1s7b0n1");
/// assert_eq!(translation.bmc_xname(), "x1000c1s7b0");
/// assert!(!translation.used_fallback());
///
/// let translation = translate("compute-01");
/// assert_eq!(translation.bmc_xname(), "compute-01");
/// assert!(translation.used_fallback());
/// ```
pub fn translate(node_xname: &str) -> XnameTranslation {
    match node_xname_to_bmc_xname(node_xname) {
        Ok(bmc_xname) => XnameTranslation {
            bmc_xname,
            fallback: None,
        },
        Err(reason) => XnameTranslation {
            bmc_xname: node_xname.to_string(),
            fallback: Some(reason),
        },
    }
}

/// Derives the BMC xname for a node xname.
///
/// # Errors
///
/// Returns a `ValidationError` if `xname` is not of the form
/// `x<N>c<N>s<N>b<N>n<N>`.
pub fn node_xname_to_bmc_xname(xname: &str) -> Result<String, ValidationError> {
    if xname.is_empty() {
        return Err(ValidationError::Field {
            field: "xname".to_string(),
            message: "xname cannot be empty".to_string(),
        });
    }

    let mut rest = xname;
    let mut bmc_len = 0;
    for ordinal in NODE_ORDINALS {
        rest = rest.strip_prefix(ordinal).ok_or_else(|| {
            ValidationError::Format(format!(
                "{} is not a node xname: expected '{}' at position {}",
                xname,
                ordinal,
                xname.len() - rest.len()
            ))
        })?;

        let digits = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 {
            return Err(ValidationError::Format(format!(
                "{} is not a node xname: '{}' has no ordinal",
                xname, ordinal
            )));
        }
        rest = &rest[digits..];

        if ordinal == BMC_ORDINAL {
            bmc_len = xname.len() - rest.len();
        }
    }

    if !rest.is_empty() {
        return Err(ValidationError::Format(format!(
            "{} is not a node xname: unexpected trailing '{}'",
            xname, rest
        )));
    }

    Ok(xname[..bmc_len].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_node_xnames() {
        let test_cases = vec![
            ("x1000c1s7b0n0", "x1000c1s7b0"),
            ("x1000c1s7b0n1", "x1000c1s7b0"),
            ("x0c0s0b0n0", "x0c0s0b0"),
            ("x3000c0s17b1n12", "x3000c0s17b1"),
            ("x9999c7s64b3n7", "x9999c7s64b3"),
        ];

        for (node, bmc) in test_cases {
            assert_eq!(
                node_xname_to_bmc_xname(node).as_deref(),
                Ok(bmc),
                "node xname {}",
                node
            );
        }
    }

    #[test]
    fn test_invalid_node_xnames() {
        let test_cases = vec![
            ("", "empty xname"),
            ("nid0001", "not an xname"),
            ("x1000c1s7b0", "bmc xname"),
            ("x1000c1s7", "slot xname"),
            ("x1000c1s7b0n", "missing node ordinal"),
            ("xc1s7b0n0", "missing cabinet ordinal"),
            ("x1000c1s7b0n0p0", "trailing processor ordinal"),
            ("X1000C1S7B0N0", "upper case"),
            ("x1000c1s7b0n0 ", "trailing space"),
        ];

        for (xname, case) in test_cases {
            assert!(
                node_xname_to_bmc_xname(xname).is_err(),
                "Case '{}' should fail: {}",
                case,
                xname
            );
        }
    }

    #[test]
    fn test_translate_conforming() {
        let translation = translate("x1000c1s7b0n0");
        assert_eq!(translation.bmc_xname(), "x1000c1s7b0");
        assert!(!translation.used_fallback());
        assert!(translation.fallback_reason().is_none());
    }

    #[test]
    fn test_translate_fallback_keeps_node_xname() {
        let translation = translate("compute-01");
        assert_eq!(translation.bmc_xname(), "compute-01");
        assert!(translation.used_fallback());
        assert!(matches!(
            translation.fallback_reason(),
            Some(ValidationError::Format(_))
        ));
    }

    #[test]
    fn test_translate_is_deterministic() {
        assert_eq!(translate("x1000c1s7b0n0"), translate("x1000c1s7b0n0"));
        assert_eq!(translate("bogus"), translate("bogus"));
    }
}
