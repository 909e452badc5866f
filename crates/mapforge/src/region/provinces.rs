//! Indonesian province reference table (38 provinces, including the
//! 2022 Papua splits) and the alias spellings commonly found in BPS exports.

/// A single province entry keyed by its canonical uppercase name.
#[derive(Debug, Clone, Copy)]
pub struct ProvinceRecord {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

const fn province(name: &'static str, lat: f64, lon: f64) -> ProvinceRecord {
    ProvinceRecord { name, lat, lon }
}

#[rustfmt::skip]
pub const PROVINCES: &[ProvinceRecord] = &[
    province("ACEH", 4.695135, 96.749399),
    province("SUMATERA UTARA", 2.115355, 99.545097),
    province("SUMATERA BARAT", -0.739940, 100.800005),
    province("RIAU", 0.293347, 101.706829),
    province("JAMBI", -1.610123, 103.613120),
    province("SUMATERA SELATAN", -3.319437, 103.914399),
    province("BENGKULU", -3.577847, 102.346388),
    province("LAMPUNG", -4.558585, 105.406808),
    province("KEPULAUAN BANGKA BELITUNG", -2.741051, 106.440587),
    province("KEPULAUAN RIAU", 3.945651, 108.142867),
    province("DKI JAKARTA", -6.214620, 106.845130),
    province("JAWA BARAT", -6.920432, 107.603708),
    province("JAWA TENGAH", -7.150975, 110.140259),
    province("DAERAH ISTIMEWA YOGYAKARTA", -7.875385, 110.426209),
    province("JAWA TIMUR", -7.536064, 112.238402),
    province("BANTEN", -6.405817, 106.064018),
    province("BALI", -8.409518, 115.188916),
    province("NUSA TENGGARA BARAT", -8.652933, 117.361648),
    province("NUSA TENGGARA TIMUR", -8.657382, 121.079370),
    province("KALIMANTAN BARAT", -0.278781, 111.475285),
    province("KALIMANTAN TENGAH", -1.681488, 113.382355),
    province("KALIMANTAN SELATAN", -3.092642, 115.283759),
    province("KALIMANTAN TIMUR", 0.538659, 116.419389),
    province("KALIMANTAN UTARA", 3.073093, 116.041389),
    province("SULAWESI UTARA", 0.624693, 123.975002),
    province("SULAWESI TENGAH", -1.430025, 121.445618),
    province("SULAWESI SELATAN", -3.668799, 119.974053),
    province("SULAWESI TENGGARA", -4.144910, 122.174605),
    province("GORONTALO", 0.699937, 122.446724),
    province("SULAWESI BARAT", -2.844137, 119.232078),
    province("MALUKU", -3.238462, 130.145273),
    province("MALUKU UTARA", 1.570999, 127.808769),
    province("PAPUA BARAT", -1.336115, 133.174716),
    province("PAPUA", -4.269928, 138.080353),
    province("PAPUA TENGAH", -4.0, 136.0),
    province("PAPUA PEGUNUNGAN", -4.0, 139.5),
    province("PAPUA SELATAN", -7.0, 139.0),
    province("PAPUA BARAT DAYA", -1.0, 131.5),
];

/// Alternate spellings mapped to the canonical province name.
///
/// Applied after upper-casing and removing the "PROVINSI" prefix.
pub const PROVINCE_ALIASES: &[(&str, &str)] = &[
    ("DIY", "DAERAH ISTIMEWA YOGYAKARTA"),
    ("DI YOGYAKARTA", "DAERAH ISTIMEWA YOGYAKARTA"),
    ("D.I. YOGYAKARTA", "DAERAH ISTIMEWA YOGYAKARTA"),
    ("DKI", "DKI JAKARTA"),
    ("D.K.I. JAKARTA", "DKI JAKARTA"),
    ("BANGKA BELITUNG", "KEPULAUAN BANGKA BELITUNG"),
    ("NTB", "NUSA TENGGARA BARAT"),
    ("NTT", "NUSA TENGGARA TIMUR"),
];
