//! Shared builders for donation/volunteer test data.

use chrono::{DateTime, TimeZone, Utc};

use crate::donation::{
    AssignedVolunteer, Donation, DonationId, DonationStatus, GeoPoint, Location, Volunteer,
    VolunteerId,
};

pub(crate) fn ts(ms: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(ms).unwrap()
}

pub(crate) fn donation(id: &str, status: DonationStatus, expiry_ms: i64) -> Donation {
    Donation {
        id: DonationId::from(id),
        donor_name: format!("Donor {}", id),
        food_quantity: "12 meal boxes".to_string(),
        location: Location {
            address: "88 Harbor St".to_string(),
            latitude: 37.7749,
            longitude: -122.4194,
        },
        expiry_time: ts(expiry_ms),
        status,
        volunteer: None,
    }
}

pub(crate) fn assigned(name: &str, eta_ms: Option<i64>) -> AssignedVolunteer {
    AssignedVolunteer {
        name: name.to_string(),
        estimated_arrival: eta_ms.map(ts),
    }
}

pub(crate) fn volunteer(id: &str, is_available: bool, coords: Option<(f64, f64)>) -> Volunteer {
    Volunteer {
        id: VolunteerId::from(id),
        name: format!("Volunteer {}", id),
        is_available,
        coordinates: coords.map(|(latitude, longitude)| GeoPoint {
            latitude,
            longitude,
        }),
    }
}
