//! Country reference table.
//!
//! One record per country: ISO 3166-1 alpha-2 and alpha-3 codes, the UN M49
//! numeric code where it commonly shows up in statistical exports, an English
//! short name and an approximate centroid. Both ISO codes of a country live on
//! the same record, so they always resolve to the same centroid.

/// A single country entry.
#[derive(Debug, Clone, Copy)]
pub struct CountryRecord {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub numeric: Option<&'static str>,
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

const fn country(
    alpha2: &'static str,
    alpha3: &'static str,
    numeric: Option<&'static str>,
    name: &'static str,
    lat: f64,
    lon: f64,
) -> CountryRecord {
    CountryRecord {
        alpha2,
        alpha3,
        numeric,
        name,
        lat,
        lon,
    }
}

#[rustfmt::skip]
pub const COUNTRIES: &[CountryRecord] = &[
    country("AF", "AFG", Some("4"), "Afghanistan", 33.93911, 67.709953),
    country("AL", "ALB", Some("8"), "Albania", 41.153332, 20.168331),
    country("DZ", "DZA", Some("12"), "Algeria", 28.033886, 1.659626),
    country("AD", "AND", None, "Andorra", 42.546245, 1.601554),
    country("AO", "AGO", None, "Angola", -11.202692, 17.873887),
    country("AR", "ARG", None, "Argentina", -38.416097, -63.616672),
    country("AM", "ARM", None, "Armenia", 40.069099, 45.038189),
    country("AU", "AUS", Some("36"), "Australia", -25.274398, 133.775136),
    country("AT", "AUT", Some("40"), "Austria", 47.516231, 14.550072),
    country("AZ", "AZE", None, "Azerbaijan", 40.143105, 47.576927),
    country("BS", "BHS", None, "Bahamas", 25.03428, -77.39628),
    country("BH", "BHR", None, "Bahrain", 26.0667, 50.5577),
    country("BD", "BGD", Some("50"), "Bangladesh", 23.684994, 90.356331),
    country("BY", "BLR", None, "Belarus", 53.709807, 27.953389),
    country("BE", "BEL", None, "Belgium", 50.503887, 4.469936),
    country("BZ", "BLZ", None, "Belize", 17.189877, -88.49765),
    country("BJ", "BEN", None, "Benin", 9.30769, 2.315834),
    country("BT", "BTN", None, "Bhutan", 27.514162, 90.433601),
    country("BO", "BOL", None, "Bolivia", -16.290154, -63.588653),
    country("BA", "BIH", None, "Bosnia and Herzegovina", 43.915886, 17.679076),
    country("BW", "BWA", None, "Botswana", -22.328474, 24.684866),
    country("BR", "BRA", Some("76"), "Brazil", -14.235004, -51.92528),
    country("BN", "BRN", None, "Brunei Darussalam", 4.535277, 114.727669),
    country("BG", "BGR", None, "Bulgaria", 42.733883, 25.48583),
    country("BF", "BFA", None, "Burkina Faso", 12.238333, -1.561593),
    country("BI", "BDI", None, "Burundi", -3.373056, 29.918886),
    country("KH", "KHM", None, "Cambodia", 12.565679, 104.990963),
    country("CM", "CMR", None, "Cameroon", 7.369722, 12.354722),
    country("CA", "CAN", Some("124"), "Canada", 56.130366, -106.346771),
    country("CV", "CPV", None, "Cabo Verde", 16.002082, -24.013197),
    country("CF", "CAF", None, "Central African Republic", 6.611111, 20.939444),
    country("TD", "TCD", None, "Chad", 15.454166, 18.732207),
    country("CL", "CHL", None, "Chile", -35.675147, -71.542969),
    country("CN", "CHN", Some("156"), "China", 35.86166, 104.195397),
    country("CO", "COL", None, "Colombia", 4.570868, -74.297333),
    country("KM", "COM", None, "Comoros", -11.875001, 43.872219),
    country("CG", "COG", None, "Congo", -0.228021, 15.827659),
    country("CD", "COD", None, "Congo, The Democratic Republic of the", -4.038333, 21.758664),
    country("CR", "CRI", None, "Costa Rica", 9.748917, -83.753428),
    country("CI", "CIV", None, "Cote d'Ivoire", 7.539989, -5.54708),
    country("HR", "HRV", None, "Croatia", 45.1, 15.2),
    country("CU", "CUB", None, "Cuba", 21.521757, -77.781167),
    country("CY", "CYP", None, "Cyprus", 35.126413, 33.429859),
    country("CZ", "CZE", None, "Czechia", 49.817492, 15.472962),
    country("DK", "DNK", None, "Denmark", 56.26392, 9.501785),
    country("DJ", "DJI", None, "Djibouti", 11.825138, 42.590275),
    country("DM", "DMA", None, "Dominica", 15.414999, -61.370976),
    country("DO", "DOM", None, "Dominican Republic", 18.735693, -70.162651),
    country("EC", "ECU", None, "Ecuador", -1.831239, -78.183406),
    country("EG", "EGY", None, "Egypt", 26.820553, 30.802498),
    country("SV", "SLV", None, "El Salvador", 13.794185, -88.89653),
    country("GQ", "GNQ", None, "Equatorial Guinea", 1.650801, 10.267895),
    country("ER", "ERI", None, "Eritrea", 15.179384, 39.782334),
    country("EE", "EST", None, "Estonia", 58.595272, 25.013607),
    country("ET", "ETH", None, "Ethiopia", 9.145, 40.489673),
    country("FJ", "FJI", None, "Fiji", -17.713371, 178.065032),
    country("FI", "FIN", None, "Finland", 61.92411, 25.748151),
    country("FR", "FRA", Some("250"), "France", 46.227638, 2.213749),
    country("GA", "GAB", None, "Gabon", -0.803689, 11.609444),
    country("GM", "GMB", None, "Gambia", 13.443182, -15.310139),
    country("GE", "GEO", None, "Georgia", 42.315407, 43.356892),
    country("DE", "DEU", Some("276"), "Germany", 51.165691, 10.451526),
    country("GH", "GHA", None, "Ghana", 7.946527, -1.023194),
    country("GR", "GRC", None, "Greece", 39.074208, 21.824312),
    country("GT", "GTM", None, "Guatemala", 15.783471, -90.230759),
    country("GN", "GIN", None, "Guinea", 9.945587, -9.696645),
    country("GW", "GNB", None, "Guinea-Bissau", 11.803749, -15.180413),
    country("GY", "GUY", None, "Guyana", 4.860416, -58.93018),
    country("HT", "HTI", None, "Haiti", 18.971187, -72.285215),
    country("HN", "HND", None, "Honduras", 15.199999, -86.241905),
    country("HU", "HUN", None, "Hungary", 47.162494, 19.503304),
    country("IS", "ISL", None, "Iceland", 64.963051, -19.020835),
    country("IN", "IND", Some("356"), "India", 20.593684, 78.96288),
    country("ID", "IDN", Some("360"), "Indonesia", -0.789275, 113.921327),
    country("IR", "IRN", None, "Iran", 32.427908, 53.688046),
    country("IQ", "IRQ", None, "Iraq", 33.223191, 43.679291),
    country("IE", "IRL", None, "Ireland", 53.41291, -8.24389),
    country("IL", "ISR", None, "Israel", 31.046051, 34.851612),
    country("IT", "ITA", None, "Italy", 41.87194, 12.56738),
    country("JM", "JAM", None, "Jamaica", 18.109581, -77.297508),
    country("JP", "JPN", Some("392"), "Japan", 36.204824, 138.252924),
    country("JO", "JOR", None, "Jordan", 30.585164, 36.238414),
    country("KZ", "KAZ", None, "Kazakhstan", 48.019573, 66.923684),
    country("KE", "KEN", None, "Kenya", -0.023559, 37.906193),
    country("KI", "KIR", None, "Kiribati", -3.370417, -168.734039),
    country("KP", "PRK", None, "North Korea", 40.339852, 127.510093),
    country("KR", "KOR", Some("410"), "South Korea", 35.907757, 127.766922),
    country("KW", "KWT", None, "Kuwait", 29.31166, 47.481766),
    country("KG", "KGZ", None, "Kyrgyzstan", 41.20438, 74.766098),
    country("LA", "LAO", None, "Lao People's Democratic Republic", 19.85627, 102.495496),
    country("LV", "LVA", None, "Latvia", 56.879635, 24.603189),
    country("LB", "LBN", None, "Lebanon", 33.854721, 35.862285),
    country("LS", "LSO", None, "Lesotho", -29.609988, 28.233608),
    country("LR", "LBR", None, "Liberia", 6.428055, -9.429499),
    country("LY", "LBY", None, "Libya", 26.3351, 17.228331),
    country("LI", "LIE", None, "Liechtenstein", 47.166, 9.555373),
    country("LT", "LTU", None, "Lithuania", 55.169438, 23.881275),
    country("LU", "LUX", None, "Luxembourg", 49.815273, 6.129583),
    country("MK", "MKD", None, "North Macedonia", 41.512386, 21.747419),
    country("MG", "MDG", None, "Madagascar", -18.766947, 46.869107),
    country("MW", "MWI", None, "Malawi", -13.254308, 34.301525),
    country("MY", "MYS", None, "Malaysia", 4.210484, 101.975766),
    country("MV", "MDV", None, "Maldives", 3.202778, 73.22068),
    country("ML", "MLI", None, "Mali", 17.570692, -3.996166),
    country("MT", "MLT", None, "Malta", 35.937496, 14.375416),
    country("MR", "MRT", None, "Mauritania", 21.00789, -10.940835),
    country("MU", "MUS", None, "Mauritius", -20.348404, 57.552152),
    country("MX", "MEX", Some("484"), "Mexico", 23.634501, -102.552784),
    country("MD", "MDA", None, "Moldova", 47.411631, 28.369885),
    country("MC", "MCO", None, "Monaco", 43.750298, 7.412841),
    country("MN", "MNG", None, "Mongolia", 46.862496, 103.846656),
    country("ME", "MNE", None, "Montenegro", 42.708678, 19.37439),
    country("MA", "MAR", None, "Morocco", 31.791702, -7.09262),
    country("MZ", "MOZ", None, "Mozambique", -18.665695, 35.529562),
    country("MM", "MMR", None, "Myanmar", 21.913965, 95.956223),
    country("NA", "NAM", None, "Namibia", -22.95764, 18.49041),
    country("NP", "NPL", None, "Nepal", 28.394857, 84.124008),
    country("NL", "NLD", Some("528"), "Netherlands", 52.132633, 5.291266),
    country("NZ", "NZL", None, "New Zealand", -40.900557, 174.885971),
    country("NI", "NIC", None, "Nicaragua", 12.865416, -85.207229),
    country("NE", "NER", None, "Niger", 17.607789, 8.081666),
    country("NG", "NGA", None, "Nigeria", 9.081999, 8.675277),
    country("NO", "NOR", None, "Norway", 60.472024, 8.468946),
    country("OM", "OMN", None, "Oman", 21.512583, 55.923255),
    country("PK", "PAK", None, "Pakistan", 30.375321, 69.345116),
    country("PA", "PAN", None, "Panama", 8.537981, -80.782127),
    country("PG", "PNG", None, "Papua New Guinea", -6.314993, 143.95555),
    country("PY", "PRY", None, "Paraguay", -23.442503, -58.443832),
    country("PE", "PER", None, "Peru", -9.189967, -75.015152),
    country("PH", "PHL", None, "Philippines", 12.879721, 121.774017),
    country("PL", "POL", None, "Poland", 51.919438, 19.145136),
    country("PT", "PRT", None, "Portugal", 39.399872, -8.224454),
    country("QA", "QAT", None, "Qatar", 25.354826, 51.183884),
    country("RO", "ROU", None, "Romania", 45.943161, 24.96676),
    country("RU", "RUS", Some("643"), "Russian Federation", 61.52401, 105.318756),
    country("RW", "RWA", None, "Rwanda", -1.940278, 29.873888),
    country("SA", "SAU", None, "Saudi Arabia", 23.885942, 45.079162),
    country("SN", "SEN", None, "Senegal", 14.497401, -14.452362),
    country("RS", "SRB", None, "Serbia", 44.016521, 21.005859),
    country("SL", "SLE", None, "Sierra Leone", 8.460555, -11.779889),
    country("SG", "SGP", None, "Singapore", 1.352083, 103.819836),
    country("SK", "SVK", None, "Slovakia", 48.669026, 19.699024),
    country("SI", "SVN", None, "Slovenia", 46.151241, 14.995463),
    country("SB", "SLB", None, "Solomon Islands", -9.64571, 160.156194),
    country("SO", "SOM", None, "Somalia", 5.152149, 46.199616),
    country("ZA", "ZAF", Some("710"), "South Africa", -30.559482, 22.937506),
    country("SS", "SSD", None, "South Sudan", 6.876991, 31.306978),
    country("ES", "ESP", None, "Spain", 40.463667, -3.74922),
    country("LK", "LKA", None, "Sri Lanka", 7.873054, 80.771797),
    country("SD", "SDN", None, "Sudan", 12.862807, 30.217636),
    country("SR", "SUR", None, "Suriname", 3.919305, -56.027783),
    country("SZ", "SWZ", None, "Eswatini", -26.522503, 31.465866),
    country("SE", "SWE", None, "Sweden", 60.128161, 18.643501),
    country("CH", "CHE", None, "Switzerland", 46.818188, 8.227512),
    country("SY", "SYR", None, "Syrian Arab Republic", 34.802075, 38.996815),
    country("TW", "TWN", None, "Taiwan", 23.69781, 120.960515),
    country("TJ", "TJK", None, "Tajikistan", 38.861034, 71.276093),
    country("TZ", "TZA", None, "Tanzania", -6.369028, 34.888822),
    country("TH", "THA", None, "Thailand", 15.870032, 100.992541),
    country("TL", "TLS", None, "Timor-Leste", -8.874217, 125.727539),
    country("TG", "TGO", None, "Togo", 8.619543, 0.824782),
    country("TN", "TUN", None, "Tunisia", 33.886917, 9.537499),
    country("TR", "TUR", None, "Turkey", 38.963745, 35.243322),
    country("TM", "TKM", None, "Turkmenistan", 38.969719, 59.556278),
    country("UG", "UGA", None, "Uganda", 1.373333, 32.290275),
    country("UA", "UKR", None, "Ukraine", 48.379433, 31.16558),
    country("AE", "ARE", None, "United Arab Emirates", 23.424076, 53.847818),
    country("GB", "GBR", Some("826"), "United Kingdom", 55.378051, -3.435973),
    country("US", "USA", Some("840"), "United States", 37.09024, -95.712891),
    country("UY", "URY", None, "Uruguay", -32.522779, -55.765835),
    country("UZ", "UZB", None, "Uzbekistan", 41.377491, 64.585262),
    country("VU", "VUT", None, "Vanuatu", -15.376706, 166.959158),
    country("VE", "VEN", None, "Venezuela", 6.42375, -66.58973),
    country("VN", "VNM", None, "Viet Nam", 14.058324, 108.277199),
    country("YE", "YEM", None, "Yemen", 15.552727, 48.516388),
    country("ZM", "ZMB", None, "Zambia", -13.133897, 27.849332),
    country("ZW", "ZWE", None, "Zimbabwe", -19.015438, 29.154857),
];
