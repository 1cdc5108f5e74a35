//! Static product catalog used by the order generator.
//!
//! Both tables are exhaustive matches over [`Category`], so every category
//! always has a product list and a price band.

use contracts::enums::Category;

/// Products sold in a category (never empty)
pub fn products(category: Category) -> &'static [&'static str] {
    match category {
        Category::Electronics => &[
            "Samsung 65\" 4K Smart TV",
            "LG Washing Machine 7kg",
            "Sony Bluetooth Speaker",
            "Canon DSLR Camera",
            "HP Laptop 15.6\"",
            "Dell Monitor 24\"",
            "Logitech Wireless Mouse",
            "JBL Headphones",
            "Philips Air Fryer",
        ],
        Category::Mobiles => &[
            "iPhone 15 Pro",
            "Samsung Galaxy S24",
            "OnePlus 12",
            "Xiaomi Redmi Note 13",
            "Realme GT 5",
            "Vivo V30",
            "OPPO Reno 11",
            "Nothing Phone 2",
            "Motorola Edge 40",
            "Google Pixel 8",
        ],
        Category::Fashion => &[
            "Levi's Men Jeans",
            "Nike Running Shoes",
            "Adidas T-Shirt",
            "Puma Sports Jacket",
            "Raymond Formal Shirt",
            "Allen Solly Trousers",
            "US Polo Casual Shirt",
            "Roadster Denim Jacket",
            "H&M Dress",
            "Zara Women Top",
            "Manyavar Kurta",
            "Biba Ethnic Wear",
        ],
        Category::HomeFurniture => &[
            "Godrej Steel Almirah",
            "Nilkamal Plastic Chair",
            "Urban Ladder Sofa",
            "IKEA Study Table",
            "Sleepwell Mattress",
            "Prestige Cooker Set",
            "Bombay Dyeing Bedsheet",
            "Cortina Curtains",
            "Havells Table Lamp",
        ],
        Category::Appliances => &[
            "Voltas 1.5 Ton AC",
            "Blue Star Refrigerator",
            "Bajaj Mixer Grinder",
            "Prestige Induction Cooktop",
            "Crompton Ceiling Fan",
            "Havells Geyser",
            "Philips Iron",
            "Kent Water Purifier",
            "Panasonic Microwave",
        ],
        Category::Books => &[
            "Think Like a Monk",
            "Atomic Habits",
            "NCERT Class 12",
            "The Psychology of Money",
            "Rich Dad Poor Dad",
            "Wings of Fire",
            "Half Girlfriend",
            "The Alchemist",
            "Ikigai",
        ],
        Category::Sports => &[
            "Cosco Cricket Bat",
            "Nivia Football",
            "Yonex Badminton Racket",
            "Decathlon Yoga Mat",
            "Strauss Dumbbells",
            "Kalenji Running Shoes",
            "Vector X Gym Bag",
            "Nivia Sports Bottle",
            "Cockatoo Cycle",
        ],
        Category::Beauty => &[
            "Lakme Face Cream",
            "Maybelline Lipstick",
            "Nivea Body Lotion",
            "Garnier Face Wash",
            "L'Oreal Shampoo",
            "Biotique Hair Oil",
            "Mamaearth Sunscreen",
            "Plum Face Serum",
            "Himalaya Moisturizer",
        ],
    }
}

/// Unit price band `[low, high)` in INR
pub fn price_band(category: Category) -> (u32, u32) {
    match category {
        Category::Electronics => (15_000, 80_000),
        Category::Mobiles => (8_000, 120_000),
        Category::Fashion => (500, 5_000),
        Category::HomeFurniture => (2_000, 45_000),
        Category::Appliances => (3_000, 55_000),
        Category::Books => (200, 800),
        Category::Sports => (300, 8_000),
        Category::Beauty => (150, 2_000),
    }
}
