use std::fmt;

use crate::{trust::Traffic, utils::readable_uint};

/// An amount in US cents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(u32);

impl Price {
    pub const fn from_dollars(dollars: u32) -> Self {
        Price(dollars * 100)
    }

    pub fn cents(self) -> u32 {
        self.0
    }

    /// `discount` is a percentage in `0..=100`.
    pub fn discounted(self, discount: u8) -> Self {
        let discount = u64::from(discount.min(100));
        Price((u64::from(self.0) * (100 - discount) / 100) as u32)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "${}.{:02}",
            readable_uint(u64::from(self.cents() / 100)),
            self.cents() % 100
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlightOffer {
    pub id: u32,
    pub route: &'static str,
    pub airline: &'static str,
    pub departure: &'static str,
    pub arrival: &'static str,
    pub duration: &'static str,
    pub price: Price,
    pub original_price: Price,
    /// Percentage off `original_price`
    pub discount: u8,
    pub available: bool,
    /// Only set for bot traffic, so the page can show what the bot was quoted
    pub bot_price: Option<Price>,
}

struct Fare {
    id: u32,
    route: &'static str,
    airline: &'static str,
    departure: &'static str,
    arrival: &'static str,
    duration: &'static str,
    list_price: Price,
    discount: u8,
}

const FARES: [Fare; 6] = [
    Fare {
        id: 1,
        route: "New York → London",
        airline: "SkyWings",
        departure: "10:30 AM",
        arrival: "10:30 PM",
        duration: "7h 0m",
        list_price: Price::from_dollars(1299),
        discount: 31,
    },
    Fare {
        id: 2,
        route: "Los Angeles → Tokyo",
        airline: "PacificAir",
        departure: "2:15 PM",
        arrival: "5:30 PM (next day)",
        duration: "11h 15m",
        list_price: Price::from_dollars(1899),
        discount: 32,
    },
    Fare {
        id: 3,
        route: "Chicago → Paris",
        airline: "EuroConnect",
        departure: "8:45 PM",
        arrival: "11:20 AM (next day)",
        duration: "8h 35m",
        list_price: Price::from_dollars(1499),
        discount: 27,
    },
    Fare {
        id: 4,
        route: "Miami → Barcelona",
        airline: "Mediterranean Air",
        departure: "11:20 AM",
        arrival: "5:45 AM (next day)",
        duration: "9h 25m",
        list_price: Price::from_dollars(1699),
        discount: 29,
    },
    Fare {
        id: 5,
        route: "Seattle → Sydney",
        airline: "Pacific Rim",
        departure: "10:00 PM",
        arrival: "6:30 AM (2 days later)",
        duration: "16h 30m",
        list_price: Price::from_dollars(2499),
        discount: 24,
    },
    Fare {
        id: 6,
        route: "Boston → Rome",
        airline: "Italian Wings",
        departure: "6:30 PM",
        arrival: "9:15 AM (next day)",
        duration: "8h 45m",
        list_price: Price::from_dollars(1599),
        discount: 25,
    },
];

impl Fare {
    fn offer(&self, traffic: Traffic) -> FlightOffer {
        let (price, discount, bot_price) = match traffic {
            Traffic::Automated => (self.list_price, 0, Some(self.list_price)),
            Traffic::Trusted => (self.list_price.discounted(self.discount), self.discount, None),
        };

        FlightOffer {
            id: self.id,
            route: self.route,
            airline: self.airline,
            departure: self.departure,
            arrival: self.arrival,
            duration: self.duration,
            price,
            original_price: self.list_price,
            discount,
            available: true,
            bot_price,
        }
    }
}

/// The six offers of the pricing demo. Humans get the discount, bots pay the
/// list price.
pub fn flight_offers(traffic: Traffic) -> Vec<FlightOffer> {
    FARES.iter().map(|fare| fare.offer(traffic)).collect()
}
