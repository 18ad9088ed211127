use crate::features::listings::models::{Coordinates, Listing, TransactionKind};

pub static LISTINGS: [Listing; 9] = [
    Listing {
        id: 1,
        code: "CV-001",
        title: "Modern Family House",
        location: "Downtown Area, City Center",
        description: "Beautiful modern family house in the heart of downtown, with spacious rooms, \
                      modern finishes and a large backyard. Recently renovated with central air \
                      conditioning and a two-car garage.",
        price: "$450,000",
        price_frequency: None,
        kind: TransactionKind::Sale,
        property_type: "House",
        bedrooms: Some(3),
        bathrooms: Some(2),
        parking: Some(2),
        area: Some(250),
        construction_area: Some(200),
        image: "/property-1.jpg",
        images: &[
            "/property-1.jpg",
            "/property-2.jpg",
            "/property-3.jpg",
            "/property-4.jpg",
        ],
        features: &[
            "Living Room",
            "Kitchen",
            "Dining Room",
            "Master Bedroom",
            "Garden",
            "Garage",
            "Air Conditioning",
            "Security System",
        ],
        agent_id: Some(1),
        coordinates: Some(Coordinates {
            latitude: 22.2331,
            longitude: -97.8611,
        }),
    },
    Listing {
        id: 2,
        code: "CR-002",
        title: "Luxury Apartment",
        location: "City Center, Premium District",
        description: "Luxurious apartment with city views, high-end finishes and access to the \
                      building gym, pool and 24/7 security.",
        price: "$1,500",
        price_frequency: Some("Monthly"),
        kind: TransactionKind::Rent,
        property_type: "Apartment",
        bedrooms: Some(2),
        bathrooms: Some(2),
        parking: Some(1),
        area: Some(120),
        construction_area: Some(110),
        image: "/property-2.jpg",
        images: &["/property-2.jpg"],
        features: &[
            "Living Room",
            "Kitchen",
            "Balcony",
            "Air Conditioning",
            "Gym Access",
            "Pool Access",
            "Security 24/7",
            "Parking",
        ],
        agent_id: Some(2),
        coordinates: Some(Coordinates {
            latitude: 22.2764,
            longitude: -97.8465,
        }),
    },
    Listing {
        id: 3,
        code: "CV-003",
        title: "Spacious Villa",
        location: "Suburban Area, Green Hills",
        description: "Villa in the Green Hills area with high ceilings, a private pool, \
                      landscaped gardens and a separate guest house.",
        price: "$680,000",
        price_frequency: None,
        kind: TransactionKind::Sale,
        property_type: "Villa",
        bedrooms: Some(4),
        bathrooms: Some(3),
        parking: Some(3),
        area: Some(350),
        construction_area: Some(300),
        image: "/property-3.jpg",
        images: &["/property-3.jpg"],
        features: &[
            "Living Room",
            "Kitchen",
            "Dining Room",
            "Master Suite",
            "Guest Rooms",
            "Pool",
            "Garden",
            "Guest House",
            "Garage",
            "Security System",
            "Air Conditioning",
        ],
        agent_id: Some(3),
        coordinates: Some(Coordinates {
            latitude: 22.3869,
            longitude: -97.9394,
        }),
    },
    Listing {
        id: 4,
        code: "CV-004",
        title: "Contemporary Beach House",
        location: "Coastal Area, Beachfront",
        description: "Beachfront house with ocean views, an infinity pool and a rooftop terrace.",
        price: "$850,000",
        price_frequency: None,
        kind: TransactionKind::Sale,
        property_type: "House",
        bedrooms: Some(5),
        bathrooms: Some(4),
        parking: Some(2),
        area: Some(400),
        construction_area: Some(350),
        image: "/property-4.jpg",
        images: &["/property-4.jpg"],
        features: &[
            "Ocean View",
            "Beach Access",
            "Infinity Pool",
            "Rooftop Terrace",
            "Smart Home System",
            "Modern Kitchen",
            "Master Suite",
            "Guest Bedrooms",
            "Outdoor Shower",
            "BBQ Area",
            "Security System",
        ],
        agent_id: Some(4),
        coordinates: Some(Coordinates {
            latitude: 22.2189,
            longitude: -97.8292,
        }),
    },
    Listing {
        id: 5,
        code: "CR-005",
        title: "Executive Penthouse",
        location: "Financial District, Tower Heights",
        description: "Penthouse with skyline views, a private elevator and concierge service.",
        price: "$3,200",
        price_frequency: Some("Monthly"),
        kind: TransactionKind::Rent,
        property_type: "Apartment",
        bedrooms: Some(3),
        bathrooms: Some(3),
        parking: Some(2),
        area: Some(200),
        construction_area: Some(180),
        image: "/property-5.jpg",
        images: &["/property-5.jpg"],
        features: &[
            "Skyline Views",
            "Private Elevator",
            "Wine Cellar",
            "Terrace",
            "Gourmet Kitchen",
            "Master Suite",
            "Walk-in Closets",
            "Home Office",
            "Concierge Service",
            "Valet Parking",
            "Gym Access",
        ],
        agent_id: Some(5),
        coordinates: Some(Coordinates {
            latitude: 22.2450,
            longitude: -97.8550,
        }),
    },
    Listing {
        id: 6,
        code: "CR-006",
        title: "Modern Downtown Condo",
        location: "Downtown, Arts District",
        description: "Open-plan condo in the arts district with large windows and in-unit laundry.",
        price: "$1,800",
        price_frequency: Some("Monthly"),
        kind: TransactionKind::Rent,
        property_type: "Apartment",
        bedrooms: Some(2),
        bathrooms: Some(2),
        parking: Some(1),
        area: Some(140),
        construction_area: Some(130),
        image: "/property-6.jpg",
        images: &["/property-6.jpg"],
        features: &[
            "Open Floor Plan",
            "Modern Kitchen",
            "Hardwood Floors",
            "Large Windows",
            "In-Unit Laundry",
            "Balcony",
            "Building Gym",
            "Rooftop Lounge",
            "Bike Storage",
            "Pet Friendly",
        ],
        agent_id: Some(6),
        coordinates: Some(Coordinates {
            latitude: 22.2300,
            longitude: -97.8500,
        }),
    },
    Listing {
        id: 7,
        code: "CV-007",
        title: "Colonial Family Home",
        location: "Historic District, Old Town",
        description: "Colonial home around a central courtyard, with original tile work and a \
                      covered terrace.",
        price: "$520,000",
        price_frequency: None,
        kind: TransactionKind::Sale,
        property_type: "Casa",
        bedrooms: Some(4),
        bathrooms: Some(3),
        parking: Some(2),
        area: Some(280),
        construction_area: Some(240),
        image: "/property-7.jpg",
        images: &["/property-7.jpg"],
        features: &[
            "Central Courtyard",
            "High Ceilings",
            "Original Tile Work",
            "Modern Kitchen",
            "Master Suite",
            "Guest Bedrooms",
            "Covered Terrace",
            "Storage Room",
            "Security System",
            "Air Conditioning",
        ],
        agent_id: Some(1),
        coordinates: Some(Coordinates {
            latitude: 22.2350,
            longitude: -97.8480,
        }),
    },
    Listing {
        id: 8,
        code: "CR-008",
        title: "Waterfront Luxury Penthouse",
        location: "Marina District, Waterfront",
        description: "Marina-front penthouse with a private rooftop, infinity pool and home theater.",
        price: "$4,500",
        price_frequency: Some("Monthly"),
        kind: TransactionKind::Rent,
        property_type: "Departamento",
        bedrooms: Some(4),
        bathrooms: Some(4),
        parking: Some(3),
        area: Some(280),
        construction_area: Some(260),
        image: "/property-8.jpg",
        images: &["/property-8.jpg"],
        features: &[
            "Marina Views",
            "Private Rooftop",
            "Infinity Pool",
            "Wine Cellar",
            "Smart Home System",
            "Gourmet Kitchen",
            "Master Suite",
            "Walk-in Closets",
            "Home Theater",
            "Marina Club Access",
            "Concierge Service",
            "Valet Parking",
        ],
        agent_id: Some(2),
        coordinates: Some(Coordinates {
            latitude: 22.2200,
            longitude: -97.8350,
        }),
    },
    Listing {
        id: 9,
        code: "CV-009",
        title: "Prime Commercial Space",
        location: "Business District, Main Avenue",
        description: "Commercial building with flexible floor plans, high-speed connectivity and \
                      ample parking on Main Avenue.",
        price: "$890,000",
        price_frequency: None,
        kind: TransactionKind::Sale,
        property_type: "Local",
        bedrooms: Some(0),
        bathrooms: Some(4),
        parking: Some(8),
        area: Some(450),
        construction_area: Some(420),
        image: "/property-9.jpg",
        images: &["/property-9.jpg"],
        features: &[
            "Prime Location",
            "Flexible Floor Plan",
            "High-Speed Internet",
            "Conference Rooms",
            "Reception Area",
            "Kitchen Facilities",
            "Multiple Restrooms",
            "Elevator Access",
            "Security System",
            "Backup Generator",
            "Ample Parking",
            "Signage Opportunities",
        ],
        agent_id: Some(3),
        coordinates: Some(Coordinates {
            latitude: 22.2400,
            longitude: -97.8520,
        }),
    },
];
