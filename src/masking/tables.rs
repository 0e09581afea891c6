//! Static reference tables
//!
//! Compiled-in, read-only data that the generators draw from. None of these
//! tables may be empty.

/// A country with the states/provinces and cities that plausibly go with it
#[derive(Debug, PartialEq, Eq)]
pub struct AddressRegion {
    pub country: &'static str,
    pub states: &'static [&'static str],
    pub cities: &'static [&'static str],
}

pub static FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda",
    "David", "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica",
    "Thomas", "Sarah", "Charles", "Karen", "Christopher", "Lisa", "Daniel", "Nancy",
    "Matthew", "Betty", "Anthony", "Margaret", "Mark", "Sandra", "Donald", "Ashley",
    "Steven", "Kimberly", "Paul", "Emily", "Andrew", "Donna", "Joshua", "Michelle",
    "Kenneth", "Carol", "Kevin", "Amanda", "Brian", "Melissa", "George", "Deborah",
    "Timothy", "Stephanie", "Ronald", "Rebecca", "Edward", "Sharon", "Jason", "Laura",
    "Jeffrey", "Cynthia", "Ryan", "Kathleen", "Jacob", "Amy", "Gary", "Angela",
];

pub static LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas",
    "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White",
    "Harris", "Sanchez", "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young",
    "Allen", "King", "Wright", "Scott", "Torres", "Nguyen", "Hill", "Flores",
    "Green", "Adams", "Nelson", "Baker", "Hall", "Rivera", "Campbell", "Mitchell",
    "Carter", "Roberts", "Gomez", "Phillips", "Evans", "Turner", "Diaz", "Parker",
    "Cruz", "Edwards", "Collins", "Reyes", "Stewart", "Morris", "Morales", "Murphy",
];

pub static STREET_NAMES: &[&str] = &[
    "Main St", "Oak Ave", "Pine Ln", "Maple Dr", "Cedar Rd", "Elm St", "Washington Blvd",
    "Lake View Dr", "Hillcrest Ave", "Park Pl", "Sunset Blvd", "River Rd", "Church St",
    "Highland Ave", "Mill Rd", "Spring St", "Walnut St", "Chestnut Ave", "Forest Dr",
    "Meadow Ln", "Willow Way", "Birch Ct", "Jefferson Ave", "Lincoln Rd", "Franklin St",
    "Madison Ave", "Ridge Rd", "Valley View Rd", "Harbor Dr", "College Ave",
];

/// Generic place names, not tied to any region
pub static CITY_NAMES: &[&str] = &[
    "Springfield", "Riverside", "Franklin", "Greenville", "Bristol", "Clinton", "Fairview",
    "Salem", "Madison", "Georgetown", "Arlington", "Ashland", "Burlington", "Manchester",
    "Oxford", "Milton", "Newport", "Dover", "Jackson", "Chester", "Kingston", "Lexington",
    "Marion", "Dayton", "Auburn", "Hudson", "Winchester", "Clayton", "Lebanon", "Mount Vernon",
];

pub static EMAIL_DOMAINS: &[&str] = &["example.com", "test.org", "fake.net", "mail.com"];

pub static ACCOUNT_TYPES: &[&str] = &[
    "Checking Account",
    "Savings Account",
    "Money Market Account",
    "Deposit Account",
    "Investment Account",
    "Business Account",
    "Interest-Bearing Account",
    "Premium Savings",
    "High-Yield Savings",
    "Retirement Account",
];

pub static ADDRESS_REGIONS: &[AddressRegion] = &[
    AddressRegion {
        country: "USA",
        states: &[
            "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN",
            "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV",
            "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN",
            "TX", "UT", "VT", "VA", "WA", "WV", "WI", "WY",
        ],
        cities: &[
            "New York", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia",
            "San Antonio", "San Diego", "Dallas", "San Jose", "Austin", "Jacksonville",
            "Fort Worth", "Columbus", "Indianapolis", "Charlotte", "San Francisco", "Seattle",
            "Denver", "Boston", "Memphis", "Nashville", "Detroit", "Oklahoma City", "Portland",
            "Las Vegas", "Louisville", "Baltimore", "Milwaukee", "Albuquerque", "Tucson",
            "Fresno", "Long Beach", "Kansas City", "Mesa", "Atlanta", "Miami", "Arlington",
            "New Orleans", "Bakersfield", "Tampa", "Aurora", "Anaheim", "Santa Ana", "Riverside",
            "Corpus Christi", "Lexington", "Henderson", "Plano", "Stockton", "St. Louis",
        ],
    },
    AddressRegion {
        country: "Canada",
        states: &["AB", "BC", "MB", "NB", "NL", "NS", "ON", "PE", "QC", "SK"],
        cities: &[
            "Toronto", "Montreal", "Vancouver", "Calgary", "Edmonton", "Ottawa", "Winnipeg",
            "Quebec City", "Hamilton", "Kitchener", "London", "Halifax", "Windsor", "Saskatoon",
            "Laval", "Victoria", "Barrie", "St. Catharines", "Markham", "Mississauga",
        ],
    },
    AddressRegion {
        country: "Mexico",
        states: &[
            "AGS", "BC", "BCS", "CAM", "COAH", "COL", "CDMX", "DGO", "GTO", "GRO", "HGO", "JAL",
            "MEX", "MICH", "MOR", "NAY", "OAX", "PUE", "QRO", "QROO", "SLP", "SIN", "SON", "TAB",
            "TAMPS", "TLAX", "VER", "YUC", "ZAC",
        ],
        cities: &[
            "Mexico City", "Guadalajara", "Monterrey", "Ecatepec", "Puebla", "Toluca", "Leon",
            "Cancun", "Irapuato", "Juarez", "Zapopan", "Chihuahua", "Morelia", "Hermosillo",
            "Saltillo", "Merida", "Aguascalientes", "Veracruz", "Culiacan", "Celaya",
        ],
    },
    AddressRegion {
        country: "France",
        states: &["75", "78", "91", "92", "93", "94", "95", "13", "69", "67", "59"],
        cities: &[
            "Paris", "Marseille", "Lyon", "Toulouse", "Nice", "Nantes", "Strasbourg",
            "Montpellier", "Bordeaux", "Lille", "Rennes",
        ],
    },
    AddressRegion {
        country: "Germany",
        states: &[
            "BW", "BY", "BE", "BB", "HB", "HH", "HE", "MV", "NI", "NW", "RP", "SL", "SN", "ST",
            "SH", "TH",
        ],
        cities: &[
            "Berlin", "Munich", "Cologne", "Frankfurt", "Hamburg", "Dusseldorf", "Stuttgart",
            "Dortmund", "Essen", "Leipzig", "Dresden", "Hanover",
        ],
    },
    AddressRegion {
        country: "Japan",
        states: &["TO", "KA", "OS", "HY", "SA", "SH", "AIT", "GIF", "SZ", "CHB", "TOK"],
        cities: &[
            "Tokyo", "Yokohama", "Osaka", "Kobe", "Kyoto", "Kawasaki", "Saitama", "Hiroshima",
            "Fukuoka", "Nagoya", "Sapporo",
        ],
    },
    AddressRegion {
        country: "United Kingdom",
        states: &["ENG", "SCT", "WAL", "NIR"],
        cities: &[
            "London", "Manchester", "Birmingham", "Leeds", "Glasgow", "Sheffield", "Bristol",
            "Edinburgh", "Liverpool", "York", "Cambridge",
        ],
    },
    AddressRegion {
        country: "Spain",
        states: &[
            "MA", "BA", "CA", "CM", "CL", "CT", "VC", "GA", "LR", "NA", "AR", "AS", "CN", "CB",
            "CE", "EX", "MD", "ME", "MU", "PM",
        ],
        cities: &[
            "Madrid", "Barcelona", "Valencia", "Seville", "Bilbao", "Malaga", "Murcia", "Palma",
            "Las Palmas", "Alicante", "Cordoba",
        ],
    },
    AddressRegion {
        country: "Italy",
        states: &[
            "AG", "AN", "AO", "BA", "BG", "BO", "BZ", "CA", "CT", "FI", "GE", "MI", "NA", "PA",
            "PD", "PG", "RM", "TO", "TS", "VE", "VR",
        ],
        cities: &[
            "Rome", "Milan", "Naples", "Turin", "Palermo", "Genoa", "Bologna", "Florence",
            "Bari", "Catania", "Venice",
        ],
    },
];

/// Region whose `country` equals `country`, if any
pub fn region_by_country(country: &str) -> Option<&'static AddressRegion> {
    ADDRESS_REGIONS.iter().find(|r| r.country == country)
}
