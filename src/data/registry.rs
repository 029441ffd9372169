//! City data-source registry
//!
//! Static mapping from city identity to its backing CSV file and the
//! optional columns it carries.

use crate::core::City;

/// What a city's dataset provides
#[derive(Debug, Clone, Copy)]
pub(crate) struct CityInfo {
    /// File name under the data directory
    pub(crate) file: &'static str,
    /// Gender and birth-year columns are present
    pub(crate) has_demographics: bool,
}

pub(crate) fn city_info(city: City) -> CityInfo {
    match city {
        City::Chicago => CityInfo {
            file: "chicago.csv",
            has_demographics: true,
        },
        City::NewYork => CityInfo {
            file: "new_york_city.csv",
            has_demographics: true,
        },
        City::Washington => CityInfo {
            file: "washington.csv",
            has_demographics: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_city_maps_to_one_file() {
        assert_eq!(city_info(City::Chicago).file, "chicago.csv");
        assert_eq!(city_info(City::NewYork).file, "new_york_city.csv");
        assert_eq!(city_info(City::Washington).file, "washington.csv");
    }

    #[test]
    fn washington_lacks_demographics() {
        assert!(city_info(City::Chicago).has_demographics);
        assert!(city_info(City::NewYork).has_demographics);
        assert!(!city_info(City::Washington).has_demographics);
    }
}
