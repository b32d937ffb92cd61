//! City-name resolution.

use std::collections::HashSet;

use log::warn;

use crate::error::{TourError, TourResult};
use crate::models::{City, Tour};

use super::LocationTable;

/// Builds the working tour for `names`, in the order given.
///
/// Each city's original index is its position in `names`. Fails on the
/// first name missing from `table`.
///
/// # Examples
///
/// ```
/// use u_tour::io::{LocationTable, resolve_cities};
///
/// let table = LocationTable::parse("HVN,41.26,-72.89\nALB,42.75,-73.80\n".as_bytes()).unwrap();
/// let tour = resolve_cities(&table, &["ALB", "HVN"]).unwrap();
/// assert_eq!(tour.names(), vec!["ALB", "HVN"]);
/// assert_eq!(tour.original_indices(), vec![0, 1]);
/// assert!(resolve_cities(&table, &["ALB", "BDL"]).is_err());
/// ```
pub fn resolve_cities<S: AsRef<str>>(table: &LocationTable, names: &[S]) -> TourResult<Tour> {
    let mut seen = HashSet::with_capacity(names.len());
    let mut cities = Vec::with_capacity(names.len());
    for (index, name) in names.iter().enumerate() {
        let name = name.as_ref();
        let place = table
            .lookup(name)
            .ok_or_else(|| TourError::UnresolvedCityName(name.to_string()))?;
        if !seen.insert(name) {
            warn!("city '{name}' requested more than once");
        }
        cities.push(City::new(place.name.clone(), place.location, index));
    }
    Ok(Tour::new(cities))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> LocationTable {
        let data = "HVN,41.26,-72.89\nALB,42.75,-73.80\nMHT,42.93,-71.44\nBDL,41.94,-72.68\n";
        LocationTable::parse(data.as_bytes()).expect("parse")
    }

    #[test]
    fn test_resolve_order() {
        let tour = resolve_cities(&table(), &["BDL", "HVN", "MHT"]).expect("resolve");
        assert_eq!(tour.names(), vec!["BDL", "HVN", "MHT"]);
        assert_eq!(tour.original_indices(), vec![0, 1, 2]);
        assert_eq!(tour[0].location().latitude(), 41.94);
    }

    #[test]
    fn test_resolve_missing() {
        let err = resolve_cities(&table(), &["HVN", "XXX", "YYY"]).expect_err("missing");
        assert!(matches!(err, TourError::UnresolvedCityName(ref n) if n == "XXX"));
    }

    #[test]
    fn test_resolve_owned_names() {
        let names = vec!["ALB".to_string(), "MHT".to_string()];
        let tour = resolve_cities(&table(), &names).expect("resolve");
        assert_eq!(tour.len(), 2);
    }

    #[test]
    fn test_resolve_repeated_name() {
        let tour = resolve_cities(&table(), &["HVN", "ALB", "HVN"]).expect("resolve");
        assert_eq!(tour.original_indices(), vec![0, 1, 2]);
    }

    #[test]
    fn test_resolve_empty() {
        let names: [&str; 0] = [];
        let tour = resolve_cities(&table(), &names).expect("resolve");
        assert!(tour.is_empty());
    }
}
