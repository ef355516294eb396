//! First-run contents for each collection.

use serde_json::{json, Value};

const CREST: &str = "/placeholder.svg?height=100&width=100";
const PORTRAIT: &str = "/placeholder.svg?height=80&width=80";
const OFFICIAL_PORTRAIT: &str = "/placeholder.svg?height=200&width=200";

pub fn pirates() -> Value {
    json!([
        {
            "id": 1,
            "name": "Straw Hat Pirates",
            "logo": CREST,
            "description": "A notorious pirate crew led by Monkey D. Luffy, seeking the One Piece treasure.",
            "members": [
                {
                    "id": 1,
                    "name": "Monkey D. Luffy",
                    "role": "Captain",
                    "bounty": 1_500_000_000u64,
                    "image": PORTRAIT,
                    "status": "active",
                    "devilFruit": "Gomu Gomu no Mi",
                    "origin": "East Blue, Foosha Village",
                    "specialty": "Fighting"
                },
                {
                    "id": 2,
                    "name": "Roronoa Zoro",
                    "role": "Swordsman",
                    "bounty": 320_000_000u64,
                    "image": PORTRAIT,
                    "status": "active",
                    "devilFruit": "",
                    "origin": "East Blue",
                    "specialty": "Swordsmanship"
                },
                {
                    "id": 3,
                    "name": "Nami",
                    "role": "Navigator",
                    "bounty": 66_000_000u64,
                    "image": PORTRAIT,
                    "status": "active",
                    "devilFruit": "",
                    "origin": "East Blue, Cocoyasi Village",
                    "specialty": "Navigation"
                }
            ],
            "sea": "East Blue",
            "status": "active",
            "shipName": "Thousand Sunny",
            "baseLocation": "Grand Line",
            "yearFounded": 1522,
            "alliances": ["Heart Pirates"]
        },
        {
            "id": 2,
            "name": "Heart Pirates",
            "logo": CREST,
            "description": "A pirate crew led by Trafalgar Law, a powerful Warlord of the Sea.",
            "members": [
                {
                    "id": 1,
                    "name": "Trafalgar D. Water Law",
                    "role": "Captain",
                    "bounty": 500_000_000u64,
                    "image": PORTRAIT,
                    "status": "active",
                    "devilFruit": "Ope Ope no Mi",
                    "origin": "North Blue, Flevance",
                    "specialty": "Medicine"
                },
                {
                    "id": 2,
                    "name": "Bepo",
                    "role": "Navigator",
                    "bounty": 500,
                    "image": PORTRAIT,
                    "status": "active",
                    "devilFruit": "",
                    "origin": "Zou",
                    "specialty": "Martial Arts"
                }
            ],
            "sea": "North Blue",
            "status": "active",
            "shipName": "Polar Tang",
            "baseLocation": "Grand Line",
            "yearFounded": 1520,
            "alliances": ["Straw Hat Pirates"]
        }
    ])
}

pub fn marines() -> Value {
    json!([
        {
            "id": 1,
            "name": "Fleet Admiral Akainu",
            "rank": "Fleet Admiral",
            "specialty": "Magma-Magma Fruit User",
            "image": CREST,
            "status": "active",
            "baseLocation": "Marine Headquarters",
            "division": "Main Force",
            "yearsOfService": 35,
            "achievements": ["Defeated Whitebeard Pirates", "Survived Revolutionary Army attack"],
            "devilFruit": "Magu Magu no Mi",
            "subordinates": ["Admiral Kizaru", "Admiral Fujitora", "Admiral Ryokugyu"]
        },
        {
            "id": 2,
            "name": "Admiral Kizaru",
            "rank": "Admiral",
            "specialty": "Light-Light Fruit User",
            "image": CREST,
            "status": "active",
            "baseLocation": "Marine Headquarters",
            "division": "Main Force",
            "yearsOfService": 30,
            "achievements": ["Defeated Supernovas at Sabaody"],
            "devilFruit": "Pika Pika no Mi",
            "subordinates": []
        },
        {
            "id": 3,
            "name": "Vice Admiral Garp",
            "rank": "Vice Admiral",
            "specialty": "Haki Master",
            "image": CREST,
            "status": "active",
            "baseLocation": "Marine Headquarters",
            "division": "Training Division",
            "yearsOfService": 40,
            "achievements": ["Cornered Gol D. Roger multiple times", "Hero of the Marines"],
            "devilFruit": "",
            "subordinates": ["Koby", "Helmeppo"]
        },
        {
            "id": 4,
            "name": "Captain Tashigi",
            "rank": "Captain",
            "specialty": "Swordsmanship",
            "image": CREST,
            "status": "active",
            "baseLocation": "G-5",
            "division": "G-5",
            "yearsOfService": 10,
            "achievements": ["Collected famous swords"],
            "devilFruit": "",
            "subordinates": []
        }
    ])
}

pub fn world_gov() -> Value {
    json!([
        {
            "id": 1,
            "name": "Taib Hasan Alif",
            "title": "Five Elders Member",
            "description": "One of the highest-ranking officials in the World Government, making crucial decisions that affect the entire world.",
            "location": "Mariejois, Bangladesh",
            "image": OFFICIAL_PORTRAIT,
            "status": "active",
            "organization": "Five Elders",
            "authority": ["Policy Making", "Military Command", "Judicial Oversight"],
            "yearsInPosition": 15,
            "specialAbilities": ["Haki", "Strategic Mind"],
            "affiliations": ["World Government", "Five Elders"]
        },
        {
            "id": 2,
            "name": "Riyadh",
            "title": "Commander-in-Chief",
            "description": "The supreme military commander of all World Government forces, including the Marines and Cipher Pol.",
            "location": "Navy Headquarters, Bangladesh",
            "image": OFFICIAL_PORTRAIT,
            "status": "active",
            "organization": "World Government",
            "authority": ["Military Command", "Intelligence"],
            "yearsInPosition": 8,
            "specialAbilities": ["Martial Arts", "Strategic Mind"],
            "affiliations": ["World Government", "Marines"]
        }
    ])
}

pub fn bounties() -> Value {
    let entrants = [
        (1, "Monkey D. Luffy", 1_500_000_000u64, "Straw Hat Pirates", 1, "Captain", "Grand Line"),
        (2, "Trafalgar D. Water Law", 500_000_000, "Heart Pirates", 2, "Captain", "North Blue"),
        (3, "Roronoa Zoro", 320_000_000, "Straw Hat Pirates", 1, "Swordsman", "East Blue"),
        (4, "Nami", 66_000_000, "Straw Hat Pirates", 1, "Navigator", "East Blue"),
        (5, "Bepo", 500, "Heart Pirates", 2, "Navigator", "North Blue"),
    ];

    let top_bounties: Vec<Value> = entrants
        .into_iter()
        .map(|(id, name, bounty, crew, crew_id, role, sea)| {
            json!({
                "id": id,
                "name": name,
                "bounty": bounty,
                "crew": crew,
                "crewId": crew_id,
                "role": role,
                "image": PORTRAIT,
                "sea": sea
            })
        })
        .collect();

    json!({
        "topBounties": top_bounties,
        "topSea": "Grand Line"
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounties_shape() {
        let doc = bounties();
        let top = doc["topBounties"].as_array().unwrap();
        assert_eq!(top.len(), 5);
        assert_eq!(doc["topSea"], "Grand Line");
        assert_eq!(top[0]["name"], "Monkey D. Luffy");
        assert_eq!(top[0]["bounty"], 1_500_000_000u64);
        assert_eq!(top[4]["crewId"], 2);
    }

    #[test]
    fn test_collection_sizes() {
        assert_eq!(pirates().as_array().unwrap().len(), 2);
        assert_eq!(marines().as_array().unwrap().len(), 4);
        assert_eq!(world_gov().as_array().unwrap().len(), 2);
        assert_eq!(pirates()[0]["members"].as_array().unwrap().len(), 3);
    }
}
