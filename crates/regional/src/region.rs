// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use aws_types::region::Region;

use crate::{Error, Result};

/// Checks that `region` looks like an AWS region id.
///
/// A valid id is made of lowercase ASCII letters and digits, split into groups by single dashes,
/// for example `us-east-1` or `cn-northwest-1`. The id ends up in the endpoint host name, so
/// anything that could not appear there is refused.
///
/// # Errors
///
/// Returns [`Error::InvalidRegion`] if the id is empty or malformed.
///
/// # Examples
///
/// ```
/// use regional::{Region, validate_region};
///
/// assert!(validate_region(&Region::new("us-gov-west-1")).is_ok());
/// assert!(validate_region(&Region::new("US_EAST_1")).is_err());
/// ```
pub fn validate_region(region: &Region) -> Result<()> {
    let id = region.as_ref();

    let well_formed = !id.is_empty()
        && id
            .split('-')
            .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));

    if well_formed {
        Ok(())
    } else {
        Err(Error::InvalidRegion(id.to_string()))
    }
}
