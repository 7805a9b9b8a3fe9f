// src/models/location.rs
//! Country → state → district → city hierarchy backing the cascading
//! location selects.

type Districts = &'static [(&'static str, &'static [&'static str])];

const INDIA: &[(&str, Districts)] = &[
    (
        "Andhra Pradesh",
        &[
            ("Visakhapatnam", &["Gajuwaka", "Madhurawada"]),
            ("Vijayawada", &["Benz Circle", "Poranki"]),
        ],
    ),
    (
        "Arunachal Pradesh",
        &[
            ("Tawang", &["Tawang Town"]),
            ("Itanagar", &["Chimpu", "Naharlagun"]),
        ],
    ),
    (
        "Assam",
        &[
            ("Guwahati", &["Dispur", "Paltan Bazaar"]),
            ("Dibrugarh", &["Mohanbari", "Barbari"]),
        ],
    ),
    (
        "Bihar",
        &[
            ("Patna", &["Kankarbagh", "Patliputra"]),
            ("Gaya", &["Bodh Gaya", "Civil Lines"]),
        ],
    ),
    (
        "Chhattisgarh",
        &[
            ("Raipur", &["Pandri", "Telibandha"]),
            ("Bilaspur", &["Torwa", "Mangla"]),
        ],
    ),
    (
        "Goa",
        &[
            ("Panaji", &["Campal", "Altinho"]),
            ("Margao", &["Fatorda", "Borda"]),
        ],
    ),
    (
        "Gujarat",
        &[
            ("Ahmedabad", &["Navrangpura", "Maninagar"]),
            ("Surat", &["Adajan", "Varachha"]),
        ],
    ),
    (
        "Haryana",
        &[
            (
                "Kurukshetra",
                &[
                    "Babain St",
                    "Ismailabad St",
                    "Ladwa",
                    "Pehowa",
                    "Shahbad",
                    "Thanesar",
                ],
            ),
            (
                "Ambala",
                &[
                    "Ambala City",
                    "Ambala Cantt",
                    "Barara",
                    "Mulana St",
                    "Naraingarh",
                    "Saha St",
                    "Shahzadpur St",
                ],
            ),
            ("Bhiwani", &["Bahal St", "Bawani Khera", "Bhiwani", "Loharu", "Siwani", "Tosham"]),
            ("Charkhi Dadri", &["Badhra", "Bondkalan St", "Dadri"]),
            (
                "Faridabad",
                &[
                    "Badkhal",
                    "Ballabgarh",
                    "Dayalpur St",
                    "Dhauj St",
                    "Faridabad",
                    "Gaunchi St",
                    "Mohna St",
                    "Tigaon St",
                ],
            ),
            (
                "Fatehabad",
                &[
                    "Bhattukalan St",
                    "Bhuna St",
                    "Fatehabad",
                    "Jakhal St",
                    "Kulan St",
                    "Ratia",
                    "Tohana",
                ],
            ),
            (
                "Gurugram",
                &[
                    "Badshahpur St",
                    "Farrukhnagar",
                    "Gurgaon",
                    "Harsaru St",
                    "Kadipur St",
                    "Manesar",
                    "Pataudi",
                    "Sohna",
                    "Wazirabad St",
                ],
            ),
            ("Hisar", &[]),
            ("Jhajjar", &[]),
            ("Jind", &[]),
            ("Kaithal", &[]),
            ("Karnal", &["Assandh", "Gharaunda", "Indri", "Karnal", "Nilokheri"]),
            ("Mahendragarh", &[]),
            ("Nuh", &[]),
            ("Palwal", &[]),
            ("Panchkula", &[]),
            ("Panipat", &["Israna", "Madlauda", "Panipat", "Samalkha"]),
            ("Rewari", &[]),
            ("Rohtak", &[]),
            ("Sirsa", &[]),
            ("Sonipat", &[]),
            (
                "Yamunanagar",
                &[
                    "Bilaspur",
                    "Chhachhrauli",
                    "Jagadhri",
                    "Pratap Nagar St",
                    "Radaur",
                    "Sadhaura St",
                    "Saraswati Nagar St",
                ],
            ),
        ],
    ),
    (
        "Himachal Pradesh",
        &[
            ("Shimla", &["Mall Road", "Lakkar Bazaar"]),
            ("Manali", &["Old Manali", "Solang Valley"]),
        ],
    ),
    (
        "Jharkhand",
        &[
            ("Ranchi", &["Kanke", "Harmu"]),
            ("Jamshedpur", &["Bistupur", "Sakchi"]),
        ],
    ),
    (
        "Karnataka",
        &[
            ("Bengaluru", &["Koramangala", "Whitefield"]),
            ("Mysuru", &["Gokulam", "Chamundi Hill"]),
        ],
    ),
    (
        "Kerala",
        &[
            ("Thiruvananthapuram", &["Kazhakoottam", "Pattom"]),
            ("Kochi", &["Ernakulam", "Fort Kochi"]),
        ],
    ),
    (
        "Madhya Pradesh",
        &[
            ("Bhopal", &["MP Nagar", "Arera Colony"]),
            ("Indore", &["Vijay Nagar", "Rau"]),
        ],
    ),
    (
        "Maharashtra",
        &[
            ("Mumbai", &["Bandra", "Andheri"]),
            ("Pune", &["Shivajinagar", "Kothrud"]),
        ],
    ),
    (
        "Manipur",
        &[
            ("Imphal", &["Lamphelpat", "Uripok"]),
            ("Churachandpur", &["Bazar Area"]),
        ],
    ),
    (
        "Meghalaya",
        &[
            ("Shillong", &["Laitumkhrah", "Police Bazaar"]),
            ("Cherrapunji", &["Sohra"]),
        ],
    ),
    (
        "Mizoram",
        &[
            ("Aizawl", &["Zarkawt", "Chhinga Veng"]),
            ("Lunglei", &["Bazar Veng", "Chanmari"]),
        ],
    ),
    (
        "Nagaland",
        &[
            ("Kohima", &["High School Area", "Agri Colony"]),
            ("Dimapur", &["Purana Bazaar", "Chumukedima"]),
        ],
    ),
    (
        "Odisha",
        &[
            ("Bhubaneswar", &["Saheed Nagar", "Patia"]),
            ("Cuttack", &["Buxi Bazaar", "Choudhury Bazaar"]),
        ],
    ),
    (
        "Punjab",
        &[
            ("Amritsar", &["Golden Temple Area", "Ranjit Avenue"]),
            ("Ludhiana", &["Sarabha Nagar", "BRS Nagar"]),
        ],
    ),
    (
        "Rajasthan",
        &[
            ("Jaipur", &["Malviya Nagar", "Vaishali Nagar"]),
            ("Udaipur", &["Fatehsagar", "Hiran Magri"]),
        ],
    ),
    (
        "Sikkim",
        &[
            ("Gangtok", &["MG Marg", "Tadong"]),
            ("Pelling", &["Lower Pelling", "Upper Pelling"]),
        ],
    ),
    (
        "Tamil Nadu",
        &[
            ("Chennai", &["T Nagar", "Velachery"]),
            ("Coimbatore", &["RS Puram", "Gandhipuram"]),
        ],
    ),
    (
        "Telangana",
        &[
            ("Hyderabad", &["Banjara Hills", "Hitech City"]),
            ("Warangal", &["Hanamkonda", "Kazipet"]),
        ],
    ),
    (
        "Tripura",
        &[
            ("Agartala", &["Krishnanagar", "Banamalipur"]),
            ("Udaipur", &["Matabari", "Rajdharnagar"]),
        ],
    ),
    (
        "Uttar Pradesh",
        &[
            ("Lucknow", &["Hazratganj", "Gomti Nagar"]),
            ("Varanasi", &["Assi Ghat", "Lanka"]),
        ],
    ),
    (
        "Uttarakhand",
        &[
            ("Dehradun", &["Rajpur Road", "Clock Tower"]),
            ("Haridwar", &["Har Ki Pauri", "Jwalapur"]),
        ],
    ),
    (
        "West Bengal",
        &[
            ("Kolkata", &["Salt Lake", "New Town"]),
            ("Darjeeling", &["Chowrasta", "Ghoom"]),
        ],
    ),
    (
        "Jammu and Kashmir",
        &[
            ("Srinagar", &["Lal Chowk", "Nishat"]),
            ("Jammu", &["Gandhi Nagar", "Bahu Plaza"]),
        ],
    ),
];

const COUNTRIES: &[(&str, &[(&str, Districts)])] = &[("India", INDIA)];

pub fn countries() -> Vec<&'static str> {
    COUNTRIES.iter().map(|(name, _)| *name).collect()
}

pub fn states(country: &str) -> Vec<&'static str> {
    find(COUNTRIES, country)
        .map(|states| states.iter().map(|(name, _)| *name).collect())
        .unwrap_or_default()
}

pub fn districts(country: &str, state: &str) -> Vec<&'static str> {
    find(COUNTRIES, country)
        .and_then(|states| find(states, state))
        .map(|districts| districts.iter().map(|(name, _)| *name).collect())
        .unwrap_or_default()
}

pub fn cities(country: &str, state: &str, district: &str) -> Vec<&'static str> {
    find(COUNTRIES, country)
        .and_then(|states| find(states, state))
        .and_then(|districts| find(districts, district))
        .map(|cities| cities.to_vec())
        .unwrap_or_default()
}

fn find<T: Copy>(entries: &[(&'static str, T)], key: &str) -> Option<T> {
    entries
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_the_hierarchy() {
        assert_eq!(countries(), vec!["India"]);
        assert!(states("India").contains(&"Haryana"));
        assert!(districts("India", "Haryana").contains(&"Kurukshetra"));
        assert!(cities("India", "Haryana", "Kurukshetra").contains(&"Thanesar"));
    }

    #[test]
    fn covers_every_state() {
        let states = states("India");
        assert_eq!(states.len(), 29);
        for state in ["Arunachal Pradesh", "Kerala", "West Bengal", "Jammu and Kashmir"] {
            assert!(states.contains(&state), "missing {state}");
        }
        assert!(districts("India", "Haryana").contains(&"Charkhi Dadri"));
        assert!(cities("India", "Haryana", "Hisar").is_empty());
    }

    #[test]
    fn unknown_keys_yield_nothing() {
        assert!(states("Atlantis").is_empty());
        assert!(districts("India", "Atlantis").is_empty());
        assert!(cities("India", "Haryana", "Atlantis").is_empty());
    }
}
