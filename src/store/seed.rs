//! Demo fixture data the stores are seeded with on startup
//!
//! Everything here mirrors a small but fully connected storefront: eight
//! products across seven categories, reviews in all three moderation
//! states, customer and admin accounts, and orders covering every status.
//! Product ratings are the average of the approved reviews, rounded to one
//! decimal, matching what review moderation would recompute.

use crate::model::{
    Address, Carrier, ContactMessage, MessageStatus, Order, OrderItem, OrderStatus, Product,
    Review, ReviewStatus, User, UserRole,
};
use chrono::NaiveDate;

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: u32,
    name: &str,
    category: &str,
    price: f64,
    image_seed: &str,
    description: &str,
    rating: f64,
    stock: u32,
    manufactured: NaiveDate,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        category: category.to_string(),
        price,
        image_url: format!("https://picsum.photos/seed/{image_seed}/400/400"),
        description: description.to_string(),
        rating,
        stock,
        manufacturing_date: manufactured,
    }
}

pub fn demo_products() -> Vec<Product> {
    vec![
        product(
            1,
            "FreePods Pro",
            "Earbuds",
            89.99,
            "freepods",
            "Active Noise Cancellation earbuds with immersive sound and a comfortable fit.",
            4.5,
            150,
            d(2023, 8, 15),
        ),
        product(
            2,
            "Powerank 20K",
            "Power Banks",
            45.50,
            "powerbank",
            "A massive 20,000mAh power bank with fast charging capabilities to keep all your devices running.",
            4.5,
            300,
            d(2023, 9, 1),
        ),
        product(
            3,
            "WatchFit 2",
            "Smart Watches",
            120.00,
            "watchfit",
            "A sleek smartwatch with health tracking, GPS, and a vibrant AMOLED display.",
            5.0,
            80,
            d(2023, 7, 20),
        ),
        product(
            4,
            "BoomBass Speaker",
            "Speakers",
            65.99,
            "speaker",
            "Portable waterproof bluetooth speaker with deep bass and a 24-hour battery life.",
            5.0,
            120,
            d(2023, 10, 5),
        ),
        product(
            5,
            "ChargeFast Trio",
            "Chargers",
            39.99,
            "charger",
            "A 3-in-1 wireless charging station for your phone, watch, and earbuds.",
            4.5,
            250,
            d(2023, 9, 22),
        ),
        product(
            6,
            "Aero Headset",
            "Headphones",
            150.75,
            "headset",
            "Over-ear headphones with studio-quality audio and supreme comfort for long listening sessions.",
            5.0,
            65,
            d(2023, 6, 10),
        ),
        product(
            7,
            "CableWrap Kit",
            "Accessories",
            15.00,
            "cablekit",
            "A complete set of magnetic cable organizers to keep your desk tidy.",
            5.0,
            500,
            d(2023, 11, 1),
        ),
        product(
            8,
            "DriveMount Pro",
            "Accessories",
            25.00,
            "carmount",
            "A sturdy and reliable car mount for your phone with quick-release mechanism.",
            5.0,
            400,
            d(2023, 10, 15),
        ),
    ]
}

fn review(
    id: u32,
    product_id: u32,
    author: &str,
    rating: u8,
    comment: &str,
    date: NaiveDate,
    status: ReviewStatus,
) -> Review {
    Review {
        id,
        product_id,
        author: author.to_string(),
        rating,
        comment: comment.to_string(),
        date,
        status,
    }
}

pub fn demo_reviews() -> Vec<Review> {
    use ReviewStatus::{Approved, Pending, Rejected};
    vec![
        review(1, 1, "Alice J.", 5, "Absolutely amazing sound quality! The ANC is top-notch.", d(2023, 10, 25), Approved),
        review(2, 1, "GadgetGuru", 4, "Great for the price, but the case feels a bit cheap.", d(2023, 10, 26), Approved),
        review(3, 1, "Mike P.", 5, "These are the best earbuds I've ever owned!", d(2023, 10, 28), Pending),
        review(4, 2, "Bob S.", 5, "This power bank is a beast! It lasts forever.", d(2023, 10, 22), Approved),
        review(5, 2, "TravelerTom", 4, "A bit heavy, but worth it for the capacity.", d(2023, 10, 24), Approved),
        review(6, 2, "Anonymous", 1, "Stopped working after a week.", d(2023, 10, 29), Rejected),
        review(7, 3, "FitnessFanatic", 5, "Tracks my workouts perfectly. The screen is gorgeous.", d(2023, 10, 20), Approved),
        review(8, 3, "Diana P.", 4, "I wish the battery life was a little longer, but otherwise it's great.", d(2023, 10, 21), Pending),
        review(9, 4, "PartyStarter", 5, "Loud, clear, and the bass is incredible for its size.", d(2023, 10, 18), Approved),
        review(10, 4, "BeachBum", 3, "It's waterproof which is cool but the connection can be spotty sometimes.", d(2023, 10, 27), Pending),
        review(11, 5, "Techie Tina", 5, "So convenient to have one spot for all my devices.", d(2023, 10, 15), Approved),
        review(12, 5, "Minimalist Max", 4, "Works great, reduces clutter on my nightstand.", d(2023, 10, 16), Approved),
        review(13, 6, "Audiophile Andy", 5, "The sound stage is impressive for this price point. Very comfortable.", d(2023, 10, 14), Approved),
        review(14, 6, "Gamer Gail", 4, "Good for music, but the mic is just okay for gaming.", d(2023, 10, 17), Pending),
        review(15, 7, "NeatFreak Nick", 5, "My desk has never looked better. The magnets are strong.", d(2023, 10, 12), Approved),
        review(16, 8, "RoadWarrior Rita", 5, "Holds my phone securely even on bumpy roads.", d(2023, 10, 11), Approved),
    ]
}

fn address(
    full_name: &str,
    street: &str,
    city: &str,
    state: &str,
    zip: &str,
    phone: &str,
) -> Address {
    Address {
        full_name: full_name.to_string(),
        street: street.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        zip: zip.to_string(),
        country: "USA".to_string(),
        phone: phone.to_string(),
    }
}

pub fn demo_users() -> Vec<User> {
    vec![
        User {
            id: 101,
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
            password: Some("password123".to_string()),
            role: UserRole::Customer,
            address: Some(address(
                "Alice Johnson",
                "123 Maple St",
                "Springfield",
                "IL",
                "62704",
                "555-0101",
            )),
            created_at: d(2023, 1, 15),
        },
        User {
            id: 102,
            name: "Bob Smith".to_string(),
            email: "bob@example.com".to_string(),
            password: Some("password123".to_string()),
            role: UserRole::Customer,
            address: Some(address(
                "Bob Smith",
                "456 Oak Ave",
                "Metropolis",
                "NY",
                "10001",
                "555-0102",
            )),
            created_at: d(2023, 2, 20),
        },
        User {
            id: 103,
            name: "Charlie Brown".to_string(),
            email: "charlie@example.com".to_string(),
            password: Some("password123".to_string()),
            role: UserRole::Customer,
            address: None,
            created_at: d(2023, 3, 10),
        },
        User {
            id: 201,
            name: "Admin User".to_string(),
            email: "admin@buyflex.com".to_string(),
            password: Some("admin123".to_string()),
            role: UserRole::Admin,
            address: None,
            created_at: d(2023, 1, 1),
        },
        User {
            id: 202,
            name: "Super Admin".to_string(),
            email: "super@buyflex.com".to_string(),
            password: Some("super123".to_string()),
            role: UserRole::SuperAdmin,
            address: None,
            created_at: d(2023, 1, 1),
        },
    ]
}

/// Fallback shipping address for seeded orders whose customer has none on
/// file.
fn placeholder_address() -> Address {
    address(
        "Mock User",
        "123 Mockingbird Lane",
        "Faketown",
        "CA",
        "90210",
        "555-555-5555",
    )
}

pub fn demo_orders() -> Vec<Order> {
    let products = demo_products();
    let users = demo_users();
    let by_id = |id: u32| -> &Product {
        // Seed products are indexed 1..=8 in order.
        &products[(id - 1) as usize]
    };
    let customer = |id: u32| users.iter().find(|u| u.id == id);
    let name_of = |id: u32| {
        customer(id)
            .map(|u| u.name.clone())
            .unwrap_or_else(|| "Unknown".to_string())
    };
    let address_of = |id: u32| {
        customer(id)
            .and_then(|u| u.address.clone())
            .unwrap_or_else(placeholder_address)
    };
    let item = |product_id: u32, quantity: u32| OrderItem {
        product: by_id(product_id).clone(),
        quantity,
    };

    let mut orders = vec![
        Order {
            id: "BFX-001".to_string(),
            customer_id: 101,
            customer_name: name_of(101),
            date: d(2023, 10, 28),
            status: OrderStatus::Delivered,
            items: vec![item(1, 1), item(6, 2)],
            total: 0.0,
            shipping_address: address_of(101),
            carrier: Some(Carrier {
                name: "FedEx".to_string(),
                tracking_url: "https://www.fedex.com/apps/fedextrack/?tracknumbers=".to_string(),
            }),
            tracking_number: Some("FX123456789".to_string()),
            estimated_delivery: Some(d(2023, 10, 31)),
        },
        Order {
            id: "BFX-002".to_string(),
            customer_id: 102,
            customer_name: name_of(102),
            date: d(2023, 10, 29),
            status: OrderStatus::Shipped,
            items: vec![item(3, 1)],
            total: 0.0,
            shipping_address: address_of(102),
            carrier: Some(Carrier {
                name: "UPS".to_string(),
                tracking_url: "https://www.ups.com/track?tracknum=".to_string(),
            }),
            tracking_number: Some("UPS987654321".to_string()),
            estimated_delivery: Some(d(2023, 11, 2)),
        },
        Order {
            id: "BFX-003".to_string(),
            customer_id: 101,
            customer_name: name_of(101),
            date: d(2023, 10, 30),
            status: OrderStatus::Processing,
            items: vec![item(4, 1), item(7, 1)],
            total: 0.0,
            shipping_address: address_of(101),
            carrier: None,
            tracking_number: None,
            estimated_delivery: Some(d(2023, 11, 5)),
        },
        Order {
            id: "BFX-004".to_string(),
            customer_id: 103,
            customer_name: name_of(103),
            date: d(2023, 10, 25),
            status: OrderStatus::Cancelled,
            items: vec![item(8, 1)],
            total: 0.0,
            shipping_address: address_of(103),
            carrier: None,
            tracking_number: None,
            estimated_delivery: None,
        },
    ];
    for order in &mut orders {
        order.total = order.subtotal();
    }
    orders
}

pub fn demo_messages() -> Vec<ContactMessage> {
    vec![
        ContactMessage {
            id: 1,
            name: "John Doe".to_string(),
            email: "john.d@example.com".to_string(),
            subject: "Question about FreePods Pro".to_string(),
            message: "I was wondering if the FreePods Pro are compatible with Android devices. \
                      I couldn't find the information on the product page. Thanks!"
                .to_string(),
            date: d(2023, 10, 28),
            status: MessageStatus::New,
        },
        ContactMessage {
            id: 2,
            name: "Jane Smith".to_string(),
            email: "jane.s@example.com".to_string(),
            subject: "Issue with my recent order (BFX-002)".to_string(),
            message: "Hi, my order BFX-002 shows as shipped but the tracking number isn't \
                      working. Can you please look into this for me?"
                .to_string(),
            date: d(2023, 10, 29),
            status: MessageStatus::Read,
        },
        ContactMessage {
            id: 3,
            name: "Peter Jones".to_string(),
            email: "peter.j@example.com".to_string(),
            subject: "Bulk Order Inquiry".to_string(),
            message: "I am interested in purchasing 50 units of the Powerank 20K for my \
                      company. Do you offer corporate discounts? Please let me know."
                .to_string(),
            date: d(2023, 10, 30),
            status: MessageStatus::Archived,
        },
        ContactMessage {
            id: 4,
            name: "Emily White".to_string(),
            email: "emily.w@example.com".to_string(),
            subject: "Return Request".to_string(),
            message: "I would like to return the BoomBass Speaker I purchased. It's unopened. \
                      What is the process for returns?"
                .to_string(),
            date: d(2023, 11, 1),
            status: MessageStatus::New,
        },
    ]
}
