//! Fixed product catalog loaded into an empty cart item store

use super::model::CartItem;
use rust_decimal::Decimal;

const CATEGORY: &str = "Standard Nuts";

struct Entry {
    id: i64,
    name: &'static str,
    description: &'static str,
    size: &'static str,
    price: i64,
    image: &'static str,
}

const ENTRIES: [Entry; 9] = [
    Entry {
        id: 1,
        name: "Mixed Nuts (Almond, Brazil, Cashew, Macadamia)",
        description: "A premium mix of four powerhouse nuts offering creamy, crunchy, and earthy flavors in one nutritious bite.",
        size: "500g",
        price: 135,
        image: "https://cdn.shopify.com/s/files/1/0081/6968/5089/products/mixed-tree-nuts-exotic-raw-1kg-526597_540x.jpg?v=1692805255",
    },
    Entry {
        id: 2,
        name: "Cashews (Raw, Roasted and Salted, Peri-Peri)",
        description: "Buttery, smooth cashews in a variety of natural, roasted, or spicy peri-peri flavors. High in magnesium and healthy fats.",
        size: "500g",
        price: 160,
        image: "https://goosebumps.store/cdn/shop/files/Peri-Peri-Cashews-6_1800x1800.jpg?v=1731749434",
    },
    Entry {
        id: 3,
        name: "Almonds (Roasted and Salted)",
        description: "Crunchy, protein-rich almonds roasted to perfection and lightly salted to enhance their natural flavor.",
        size: "500g",
        price: 130,
        image: "https://tse1.explicit.bing.net/th/id/OIP.8CE0QlFao4dO9WuhSxIaVAHaHa?w=853&h=853&rs=1&pid=ImgDetMain&o=7&rm=3",
    },
    Entry {
        id: 4,
        name: "Pistachios in Shell (Roasted and Salted)",
        description: "Delicious in-shell pistachios roasted and salted, perfect for snacking and heart health.",
        size: "500g",
        price: 200,
        image: "https://tse4.mm.bing.net/th/id/OIP.FjSfL3rnVHrt_pSe_LXAgwHaHa?rs=1&pid=ImgDetMain&o=7&rm=3",
    },
    Entry {
        id: 5,
        name: "Walnuts Halves",
        description: "Crunchy, mildly bitter walnuts packed with omega-3s for brain and heart health.",
        size: "500g",
        price: 150,
        image: "https://www.shugarysweets.com/wp-content/uploads/2022/03/toasted-pecans-recipe.jpg",
    },
    Entry {
        id: 6,
        name: "Macadamia (Raw, Roasted and Salted)",
        description: "Rich, buttery macadamias that are creamy and crunchy\u{2014}perfect for indulgent healthy snacking.",
        size: "500g",
        price: 130,
        image: "https://nutsandall.co.za/wp-content/uploads/2020/04/NutsAll__47.jpg",
    },
    Entry {
        id: 7,
        name: "Brazil (Raw)",
        description: "Selenium-packed Brazil nuts with a crunchy texture and a slightly earthy flavor.",
        size: "500g",
        price: 230,
        image: "https://tse2.mm.bing.net/th/id/OIP.GSd0ed7-pTLhqsCBMsFxLgHaHa?rs=1&pid=ImgDetMain&o=7&rm=3",
    },
    Entry {
        id: 8,
        name: "Pine Kernels",
        description: "Delicate, buttery pine nuts perfect for salads, pesto, and boosting metabolism.",
        size: "250g",
        price: 180,
        image: "https://bostonandco.co.za/wp-content/uploads/2020/10/pine-nuts.jpg",
    },
    Entry {
        id: 9,
        name: "Almonds Blenched",
        description: "Blanched almonds without skins\u{2014}smooth, soft texture, perfect for baking and snacking.",
        size: "500g",
        price: 150,
        image: "https://i2.wp.com/zimmermansonline.com/wp-content/uploads/2020/04/IMG_5500-scaled.jpg?resize=1152%2C1536&ssl=1",
    },
];

/// The nine catalog items, ids 1 through 9, quantity 1 each
pub fn seed_catalog() -> Vec<CartItem> {
    ENTRIES
        .iter()
        .map(|entry| CartItem {
            id: entry.id,
            name: entry.name.to_string(),
            category: CATEGORY.to_string(),
            description: Some(entry.description.to_string()),
            size: Some(entry.size.to_string()),
            quantity: 1,
            price: Decimal::new(entry.price * 100, 2),
            image: Some(entry.image.to_string()),
        })
        .collect()
}
