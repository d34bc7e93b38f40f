//! Built-in location table for the Pittsburgh region.
//!
//! Coordinates are approximate centroids; they only need to be good enough to
//! rank fish fries by distance.

use crate::models::GeoPoint;
use crate::text::normalize;

/// Zip code centroids (zip, latitude, longitude).
pub(crate) const ZIP_CODES: &[(&str, f64, f64)] = &[
    ("15017", 40.3562, -80.1114), // Bridgeville
    ("15044", 40.6380, -79.9530), // Gibsonia
    ("15090", 40.6135, -80.0642), // Wexford
    ("15101", 40.5795, -79.9540), // Allison Park
    ("15102", 40.3211, -80.0398), // Bethel Park
    ("15106", 40.4106, -80.0894), // Carnegie
    ("15108", 40.5087, -80.2062), // Coraopolis / Moon
    ("15116", 40.5356, -79.9627), // Glenshaw
    ("15120", 40.3952, -79.9073), // Homestead / Munhall
    ("15122", 40.3667, -79.8955), // West Mifflin
    ("15136", 40.4662, -80.0884), // McKees Rocks
    ("15137", 40.3788, -79.8101), // North Versailles
    ("15143", 40.5701, -80.1495), // Sewickley
    ("15146", 40.4271, -79.7607), // Monroeville
    ("15201", 40.4748, -79.9527), // Lawrenceville
    ("15202", 40.5022, -80.0665), // Bellevue / Avalon
    ("15203", 40.4255, -79.9785), // South Side
    ("15204", 40.4552, -80.0616), // Sheraden
    ("15205", 40.4381, -80.0762), // Crafton
    ("15206", 40.4689, -79.9187), // East Liberty / Highland Park
    ("15207", 40.4003, -79.9336), // Hazelwood / Greenfield
    ("15208", 40.4549, -79.8992), // Point Breeze / Homewood
    ("15209", 40.4990, -79.9741), // Millvale / Reserve
    ("15210", 40.3994, -79.9853), // Carrick / Mt. Oliver
    ("15211", 40.4298, -80.0145), // Mount Washington
    ("15212", 40.4688, -80.0097), // North Side
    ("15213", 40.4440, -79.9556), // Oakland
    ("15214", 40.4845, -80.0142), // Perry / Brighton Heights
    ("15215", 40.4986, -79.9156), // Sharpsburg / Aspinwall
    ("15216", 40.4040, -80.0339), // Dormont / Beechview
    ("15217", 40.4318, -79.9247), // Squirrel Hill
    ("15218", 40.4241, -79.8888), // Swissvale / Regent Square
    ("15219", 40.4438, -79.9780), // Hill District / Uptown
    ("15220", 40.4172, -80.0515), // Green Tree / Banksville
    ("15221", 40.4375, -79.8718), // Wilkinsburg
    ("15222", 40.4490, -79.9932), // Downtown / Strip District
    ("15223", 40.5042, -79.9514), // Etna
    ("15224", 40.4641, -79.9445), // Bloomfield
    ("15225", 40.5055, -80.1103), // Neville Island
    ("15226", 40.3941, -80.0142), // Brookline
    ("15227", 40.3763, -79.9727), // Brentwood / Baldwin
    ("15228", 40.3694, -80.0437), // Mt. Lebanon
    ("15229", 40.5195, -80.0360), // West View
    ("15232", 40.4527, -79.9322), // Shadyside
    ("15233", 40.4598, -80.0298), // Manchester / Chateau
    ("15234", 40.3684, -80.0215), // Castle Shannon
    ("15235", 40.4601, -79.8222), // Penn Hills
    ("15236", 40.3423, -79.9775), // Pleasant Hills
    ("15237", 40.5520, -80.0365), // Ross / McKnight
    ("15238", 40.5367, -79.8766), // Blawnox / O'Hara
    ("15239", 40.4854, -79.7392), // Plum
    ("15241", 40.3334, -80.0822), // Upper St. Clair
    ("15243", 40.3830, -80.0708), // Scott / Mt. Lebanon
];

/// A named place with alternative spellings.
pub(crate) struct Neighborhood {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub latitude: f64,
    pub longitude: f64,
}

const fn place(
    name: &'static str,
    aliases: &'static [&'static str],
    latitude: f64,
    longitude: f64,
) -> Neighborhood {
    Neighborhood {
        name,
        aliases,
        latitude,
        longitude,
    }
}

pub(crate) const NEIGHBORHOODS: &[Neighborhood] = &[
    place("Downtown", &["golden triangle", "cultural district"], 40.4406, -79.9959),
    place("Strip District", &["the strip", "strip"], 40.4515, -79.9790),
    place("Lawrenceville", &["lower lawrenceville", "upper lawrenceville"], 40.4673, -79.9608),
    place("Bloomfield", &["little italy"], 40.4620, -79.9490),
    place("Garfield", &[], 40.4650, -79.9360),
    place("Polish Hill", &[], 40.4580, -79.9660),
    place("Shadyside", &[], 40.4546, -79.9350),
    place("Squirrel Hill", &["squirrel hill north", "squirrel hill south"], 40.4330, -79.9230),
    place("Oakland", &["north oakland", "south oakland", "central oakland"], 40.4417, -79.9570),
    place("Hill District", &["the hill", "hill"], 40.4450, -79.9770),
    place("East Liberty", &["eastliberty"], 40.4609, -79.9256),
    place("Highland Park", &[], 40.4797, -79.9159),
    place("Morningside", &[], 40.4800, -79.9330),
    place("Stanton Heights", &[], 40.4810, -79.9430),
    place("Point Breeze", &[], 40.4480, -79.9050),
    place("Regent Square", &[], 40.4330, -79.8960),
    place("Homewood", &[], 40.4560, -79.8980),
    place("Greenfield", &[], 40.4230, -79.9380),
    place("Hazelwood", &[], 40.4050, -79.9425),
    place("South Side", &["southside", "south side flats", "south side slopes"], 40.4283, -79.9735),
    place("Mount Washington", &["duquesne heights"], 40.4318, -80.0067),
    place("Beechview", &[], 40.4110, -80.0245),
    place("Brookline", &[], 40.3938, -80.0170),
    place("Carrick", &[], 40.3946, -79.9868),
    place("Mount Oliver", &[], 40.4142, -79.9870),
    place("North Side", &["northside", "north shore"], 40.4550, -80.0090),
    place("Troy Hill", &[], 40.4610, -79.9820),
    place("Spring Garden", &[], 40.4650, -79.9930),
    place("Manchester", &[], 40.4560, -80.0220),
    place("Brighton Heights", &[], 40.4840, -80.0390),
    place("Sheraden", &[], 40.4560, -80.0540),
    place("West End", &["elliott"], 40.4410, -80.0350),
    place("Bellevue", &[], 40.4940, -80.0520),
    place("Millvale", &[], 40.4801, -79.9784),
    place("Sharpsburg", &[], 40.4948, -79.9262),
    place("Etna", &[], 40.5045, -79.9484),
    place("Wilkinsburg", &[], 40.4417, -79.8820),
    place("Swissvale", &[], 40.4237, -79.8828),
    place("Crafton", &[], 40.4353, -80.0670),
    place("Carnegie", &[], 40.4087, -80.0834),
    place("Dormont", &[], 40.3959, -80.0334),
    place("Mount Lebanon", &["mt lebo", "lebo"], 40.3746, -80.0501),
    place("Castle Shannon", &[], 40.3648, -80.0223),
    place("Bethel Park", &[], 40.3276, -80.0395),
    place("Baldwin", &[], 40.3720, -79.9670),
    place("Munhall", &[], 40.3920, -79.9000),
    place("Homestead", &["the waterfront"], 40.4059, -79.9114),
    place("West Mifflin", &[], 40.3634, -79.8664),
    place("Penn Hills", &[], 40.5012, -79.8390),
    place("Monroeville", &[], 40.4212, -79.7881),
    place("Plum", &["plum borough"], 40.5003, -79.7495),
    place("Ross Township", &["ross"], 40.5300, -80.0200),
    place("West View", &[], 40.5223, -80.0342),
    place("McKees Rocks", &[], 40.4657, -80.0656),
    place("Upper St. Clair", &["usc"], 40.3359, -80.0834),
    place("Wexford", &[], 40.6262, -80.0556),
    place("Cranberry Township", &["cranberry"], 40.6848, -80.1070),
];

/// Looks up a 5-digit zip code.
pub(crate) fn lookup_zip(zip: &str) -> Option<GeoPoint> {
    ZIP_CODES
        .iter()
        .find(|(code, _, _)| *code == zip)
        .map(|(_, lat, lon)| GeoPoint::new(*lat, *lon))
}

/// Looks up a neighborhood by name or alias; `query` must already be normalized.
pub(crate) fn lookup_neighborhood(query: &str) -> Option<(&'static str, GeoPoint)> {
    NEIGHBORHOODS
        .iter()
        .find(|n| {
            normalize(n.name) == query || n.aliases.iter().any(|alias| normalize(alias) == query)
        })
        .map(|n| (n.name, GeoPoint::new(n.latitude, n.longitude)))
}
