/// Earth mean radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two (lat, lon) points in degrees, in km.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// 一位小数的展示字符串，例如 `"3.2"`
pub fn format_distance_km(km: f64) -> String {
    format!("{:.1}", km)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SF: (f64, f64) = (37.7749, -122.4194);
    const LA: (f64, f64) = (34.0522, -118.2437);

    #[test]
    fn test_distance_is_symmetric() {
        let ab = haversine_km(SF.0, SF.1, LA.0, LA.1);
        let ba = haversine_km(LA.0, LA.1, SF.0, SF.1);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let d = haversine_km(SF.0, SF.1, SF.0, SF.1);
        assert!(d.abs() < 1e-9);
    }

    #[test]
    fn test_known_distance_sf_to_la() {
        // 大圆距离约 559 km
        let d = haversine_km(SF.0, SF.1, LA.0, LA.1);
        assert!((d - 559.0).abs() < 5.0, "got {}", d);
    }

    #[test]
    fn test_short_distance_within_city() {
        // 渡轮大厦到金门公园约 7 km
        let d = haversine_km(37.7955, -122.3937, 37.7694, -122.4862);
        assert!(d > 5.0 && d < 10.0, "got {}", d);
    }

    #[test]
    fn test_format_one_decimal() {
        assert_eq!(format_distance_km(3.247), "3.2");
        assert_eq!(format_distance_km(0.0), "0.0");
        assert_eq!(format_distance_km(12.0), "12.0");
    }

    #[test]
    fn test_format_rounds_to_nearest() {
        assert_eq!(format_distance_km(3.26), "3.3");
        assert_eq!(format_distance_km(3.94), "3.9");
    }
}
