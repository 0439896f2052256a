//! Job-type catalog, locations, and the two ways of building a worker
//! snapshot: the hand-written seed set and the seeded generator.

use rand::prelude::*;

use crate::models::Worker;

/// A catalog entry. `related` feeds the extra skills of generated workers.
#[derive(Debug, Clone, Copy)]
pub struct JobType {
    pub name: &'static str,
    pub related: &'static [&'static str],
}

pub const CATALOG: &[JobType] = &[
    JobType {
        name: "Plumber",
        related: &[
            "Pipe Installation",
            "Leak Repair",
            "Drainage",
            "Water Heater Repair",
        ],
    },
    JobType {
        name: "Electrician",
        related: &[
            "Wiring",
            "Solar Installation",
            "Inverter Setup",
            "Fault Finding",
        ],
    },
    JobType {
        name: "Carpenter",
        related: &[
            "Furniture Making",
            "Roofing",
            "Door Fitting",
            "Cabinetry",
        ],
    },
    JobType {
        name: "Painter",
        related: &[
            "Wall Finishing",
            "POP Ceiling",
            "Screeding",
            "Spray Painting",
        ],
    },
    JobType {
        name: "Mechanic",
        related: &[
            "Engine Repair",
            "Diagnostics",
            "Brake Service",
            "Auto Electrics",
        ],
    },
    JobType {
        name: "Tailor",
        related: &[
            "Alterations",
            "Native Attire",
            "Bridal Wear",
            "Embroidery",
        ],
    },
    JobType {
        name: "Hairdresser",
        related: &[
            "Braiding",
            "Styling",
            "Wig Making",
            "Hair Treatment",
        ],
    },
    JobType {
        name: "Cleaner",
        related: &[
            "Deep Cleaning",
            "Post-Construction Cleaning",
            "Laundry",
            "Fumigation",
        ],
    },
    JobType {
        name: "Welder",
        related: &[
            "Gate Fabrication",
            "Burglary Proof",
            "Steel Works",
            "Arc Welding",
        ],
    },
    JobType {
        name: "Bricklayer",
        related: &[
            "Block Laying",
            "Plastering",
            "Foundation Work",
            "Fencing",
        ],
    },
    JobType {
        name: "AC Technician",
        related: &[
            "AC Installation",
            "Gas Refill",
            "Refrigerator Repair",
            "Servicing",
        ],
    },
    JobType {
        name: "Generator Repairer",
        related: &[
            "Engine Overhaul",
            "Carburettor Cleaning",
            "Rewinding",
            "Servicing",
        ],
    },
    JobType {
        name: "Tiler",
        related: &[
            "Floor Tiling",
            "Wall Tiling",
            "Interlocking",
            "Marble Work",
        ],
    },
    JobType {
        name: "Makeup Artist",
        related: &[
            "Bridal Makeup",
            "Gele Tying",
            "Photoshoot Makeup",
            "Lash Extensions",
        ],
    },
    JobType {
        name: "Photographer",
        related: &[
            "Event Coverage",
            "Portraits",
            "Video Editing",
            "Drone Shots",
        ],
    },
    JobType {
        name: "Caterer",
        related: &[
            "Small Chops",
            "Jollof Rice",
            "Event Catering",
            "Baking",
        ],
    },
    JobType {
        name: "Driver",
        related: &[
            "Chauffeur",
            "Logistics",
            "Interstate Trips",
            "Airport Runs",
        ],
    },
    JobType {
        name: "Gardener",
        related: &[
            "Lawn Mowing",
            "Landscaping",
            "Hedge Trimming",
            "Irrigation",
        ],
    },
    JobType {
        name: "Phone Repairer",
        related: &[
            "Screen Replacement",
            "Battery Replacement",
            "Software Flashing",
            "Board Repair",
        ],
    },
    JobType {
        name: "Laundry Attendant",
        related: &[
            "Dry Cleaning",
            "Ironing",
            "Stain Removal",
            "Pickup and Delivery",
        ],
    },
];

pub const LOCATIONS: &[&str] = &[
    "Lagos",
    "Abuja",
    "Port Harcourt",
    "Ibadan",
    "Kano",
    "Enugu",
    "Benin City",
    "Kaduna",
    "Jos",
    "Owerri",
    "Abeokuta",
    "Uyo",
];

const FIRST_NAMES: &[&str] = &[
    "Chinedu", "Aisha", "Tunde", "Ngozi", "Ibrahim", "Funke", "Emeka", "Kemi", "Yusuf", "Amaka",
    "Segun", "Halima", "Obinna", "Bisi", "Musa", "Chioma", "Femi", "Zainab", "Ikenna", "Tolu",
];

const LAST_NAMES: &[&str] = &[
    "Okafor", "Bello", "Adeyemi", "Eze", "Musa", "Adebayo", "Nwosu", "Oladipo", "Abubakar",
    "Okeke", "Ogunleye", "Danjuma", "Obi", "Balogun", "Ibrahim", "Nnaji", "Akinola", "Suleiman",
    "Uche", "Lawal",
];

const AVAILABILITY: &[&str] = &[
    "Weekdays 8am-5pm",
    "Mon-Sat 9am-6pm",
    "Weekends only",
    "Evenings after 5pm",
    "24/7 emergency",
    "Flexible",
];

const PHONE_PREFIXES: &[&str] = &[
    "803", "806", "813", "703", "706", "810", "805", "807", "802", "808", "701", "909",
];

const VERIFIED_PROBABILITY: f64 = 0.7;

pub fn catalog_names(catalog: &[JobType]) -> Vec<String> {
    catalog.iter().map(|j| j.name.to_string()).collect()
}

/// Build a worker collection from `catalog × locations`, `per_pair` workers
/// for each pair. Ids run from 1 in generation order. The same inputs
/// always produce the same collection.
pub fn generate(
    catalog: &[JobType],
    locations: &[&str],
    seed: u64,
    per_pair: usize,
) -> Vec<Worker> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut workers = Vec::with_capacity(catalog.len() * locations.len() * per_pair);
    let mut next_id: u32 = 1;

    for job in catalog {
        for location in locations {
            for _ in 0..per_pair {
                workers.push(generate_one(&mut rng, next_id, job, location));
                next_id += 1;
            }
        }
    }

    workers
}

fn generate_one(rng: &mut StdRng, id: u32, job: &JobType, location: &str) -> Worker {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Ade");
    let last = LAST_NAMES.choose(rng).copied().unwrap_or("Ade");
    let availability = AVAILABILITY.choose(rng).copied().unwrap_or("Flexible");

    let rating = rng.random_range(30..=50) as f64 / 10.0;
    let hourly_rate = (rng.random_range(15..=150) * 100) as f64;
    let experience_years = rng.random_range(1..=20);

    let extra = rng.random_range(1..=2).min(job.related.len());
    let mut skills = Vec::with_capacity(extra + 1);
    skills.push(job.name.to_string());
    skills.extend(
        job.related
            .choose_multiple(rng, extra)
            .map(|s| s.to_string()),
    );

    let prefix = PHONE_PREFIXES.choose(rng).copied().unwrap_or("803");
    let contact = format!(
        "+234 {prefix} {:03} {:04}",
        rng.random_range(0..1000),
        rng.random_range(0..10000)
    );

    let description = format!(
        "{} based in {location} with {experience_years} years of experience. Skilled in {}.",
        job.name,
        skills.join(", ")
    );

    Worker {
        id,
        name: format!("{first} {last}"),
        location: location.to_string(),
        availability: availability.to_string(),
        rating,
        hourly_rate,
        skills,
        experience_years,
        description,
        job_type: job.name.to_string(),
        contact,
        verified: rng.random_bool(VERIFIED_PROBABILITY),
    }
}

/// The small hand-written dataset: Lagos and Abuja only.
pub fn seed_workers() -> Vec<Worker> {
    vec![
        Worker {
            id: 1,
            name: "Chinedu Okafor".into(),
            location: "Lagos".into(),
            availability: "Mon-Sat 8am-6pm".into(),
            rating: 4.5,
            hourly_rate: 3500.0,
            skills: strings(&["Plumber", "Pipe Installation", "Leak Repair"]),
            experience_years: 8,
            description: "Residential and commercial plumbing, fast response on leaks.".into(),
            job_type: "Plumber".into(),
            contact: "+234 803 123 4567".into(),
            verified: true,
        },
        Worker {
            id: 2,
            name: "Funke Adebayo".into(),
            location: "Abuja".into(),
            availability: "Weekends only".into(),
            rating: 4.8,
            hourly_rate: 2500.0,
            skills: strings(&["Hairdresser", "Braiding", "Wig Making"]),
            experience_years: 7,
            description: "Home-service hairdresser for braids and wigs.".into(),
            job_type: "Hairdresser".into(),
            contact: "+234 806 234 5678".into(),
            verified: false,
        },
        Worker {
            id: 3,
            name: "Tunde Adeyemi".into(),
            location: "Lagos".into(),
            availability: "Weekdays 9am-5pm".into(),
            rating: 4.3,
            hourly_rate: 3000.0,
            skills: strings(&["Carpenter", "Furniture Making", "Roofing"]),
            experience_years: 6,
            description: "Custom furniture and roof repairs.".into(),
            job_type: "Carpenter".into(),
            contact: "+234 813 345 6789".into(),
            verified: false,
        },
        Worker {
            id: 4,
            name: "Ngozi Eze".into(),
            location: "Abuja".into(),
            availability: "Flexible".into(),
            rating: 4.2,
            hourly_rate: 2800.0,
            skills: strings(&["Plumber", "Drainage", "Water Heater Repair"]),
            experience_years: 4,
            description: "Drainage clearing and water heater installs.".into(),
            job_type: "Plumber".into(),
            contact: "+234 703 456 7890".into(),
            verified: false,
        },
        Worker {
            id: 5,
            name: "Ibrahim Musa".into(),
            location: "Lagos".into(),
            availability: "Mon-Sat 7am-7pm".into(),
            rating: 4.6,
            hourly_rate: 4500.0,
            skills: strings(&["Mechanic", "Engine Repair", "Diagnostics"]),
            experience_years: 12,
            description: "Engine diagnostics and repairs for Japanese and German cars.".into(),
            job_type: "Mechanic".into(),
            contact: "+234 805 567 8901".into(),
            verified: true,
        },
        Worker {
            id: 6,
            name: "Aisha Bello".into(),
            location: "Abuja".into(),
            availability: "24/7 emergency".into(),
            rating: 4.8,
            hourly_rate: 4000.0,
            skills: strings(&["Electrician", "Wiring", "Solar Installation"]),
            experience_years: 10,
            description: "House wiring, solar panels and inverter setup.".into(),
            job_type: "Electrician".into(),
            contact: "+234 807 678 9012".into(),
            verified: true,
        },
        Worker {
            id: 7,
            name: "Emeka Nwosu".into(),
            location: "Lagos".into(),
            availability: "Weekdays 8am-5pm".into(),
            rating: 4.5,
            hourly_rate: 2000.0,
            skills: strings(&["Painter", "Wall Finishing", "POP Ceiling"]),
            experience_years: 3,
            description: "Interior painting and POP ceilings.".into(),
            job_type: "Painter".into(),
            contact: "+234 802 789 0123".into(),
            verified: false,
        },
        Worker {
            id: 8,
            name: "Kemi Oladipo".into(),
            location: "Lagos".into(),
            availability: "Evenings after 5pm".into(),
            rating: 4.0,
            hourly_rate: 2200.0,
            skills: strings(&["Tailor", "Alterations", "Native Attire"]),
            experience_years: 9,
            description: "Native attire and quick alterations.".into(),
            job_type: "Tailor".into(),
            contact: "+234 808 890 1234".into(),
            verified: true,
        },
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
