//! Randomized in-memory product catalog.
//!
//! Generated once at startup and read-only afterwards. The shape is
//! deterministic (8 categories, 13 products each), the content is random:
//! names, prices, stock levels, ratings, sale status, and category-specific
//! details all come from a uniform random source. There is no seed
//! contract; this is sample data, not a reproducible artifact.

use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::IndexedRandom;
use rust_decimal::Decimal;

use clementine_core::{Price, ProductId};

use crate::models::{Category, DetailValue, Product};

/// Products generated per category.
const ITEMS_PER_CATEGORY: usize = 13;

const ADJECTIVES: [&str; 10] = [
    "Premium",
    "Essential",
    "Classic",
    "Modern",
    "Eco-Friendly",
    "Luxury",
    "Compact",
    "Professional",
    "Artisan",
    "Smart",
];

/// Product nouns per category.
fn nouns(category: Category) -> &'static [&'static str] {
    match category {
        Category::Electronics => &[
            "Headphones",
            "Speaker",
            "Monitor",
            "Keyboard",
            "Charger",
            "Camera",
            "Tablet",
            "Smartwatch",
        ],
        Category::Fashion => &[
            "T-Shirt",
            "Jacket",
            "Sneakers",
            "Scarf",
            "Denim",
            "Backpack",
            "Sunglasses",
            "Watch",
        ],
        Category::HomeGoods => &[
            "Lamp",
            "Vase",
            "Planter",
            "Throw Blanket",
            "Candle",
            "Mug",
            "Clock",
            "Mirror",
        ],
        Category::Beauty => &[
            "Face Cream",
            "Serum",
            "Lipstick",
            "Perfume",
            "Cleanser",
            "Mask",
            "Oil",
            "Scrub",
        ],
        Category::Fitness => &[
            "Yoga Mat",
            "Dumbbells",
            "Resistance Bands",
            "Water Bottle",
            "Gym Bag",
            "Foam Roller",
            "Tracker",
            "Gloves",
        ],
        Category::FoodAndBeverage => &[
            "Coffee Beans",
            "Tea Set",
            "Chocolate",
            "Olive Oil",
            "Spices",
            "Honey",
            "Granola",
            "Juice",
        ],
        Category::Books => &[
            "Novel",
            "Cookbook",
            "Biography",
            "Art Book",
            "Guide",
            "Journal",
            "Anthology",
            "Manual",
        ],
        Category::Toys => &[
            "Puzzle",
            "Block Set",
            "Plushie",
            "Board Game",
            "Action Figure",
            "Craft Kit",
            "Robot",
            "Doll",
        ],
    }
}

/// Unsplash photo ids per category, for plausible product imagery.
fn image_ids(category: Category) -> &'static [&'static str] {
    match category {
        Category::Electronics => &[
            "1496181133206-80ce9b88a853",
            "1526738549149-8e07eca6c147",
            "1546868871-7041f2a55e12",
            "1588872657578-838c64708169",
            "1593640408609-809312d69bfa",
        ],
        Category::Fashion => &[
            "1523381210434-271e8be1f52b",
            "1515886657613-9f3515b0c78f",
            "1483985988355-763728e1935b",
            "1542291026-7eec264c27ff",
            "1591047139829-d91a961c76c4",
        ],
        Category::HomeGoods => &[
            "1583847268964-b8bc40d99fce",
            "1586023492125-27b2c045efd7",
            "1513694203232-719a280e022f",
            "1524758631624-e2822e304c36",
            "1505693542198-d451b6a71e4c",
        ],
        Category::Beauty => &[
            "1596462502278-27bfdd403ccc",
            "1571781308732-9c1d331c009c",
            "1612817204324-730f3a975af3",
            "1608248597279-f99d160bfbc8",
            "1596462502278-27bfdd403ccc",
        ],
        Category::Fitness => &[
            "1517836357463-d25dfeac3438",
            "1599058945522-28d584b6f0ff",
            "1584735175315-9d5df23860e6",
            "1571902943202-507ec2618e8f",
            "1534438327276-14e5300c3a48",
        ],
        Category::FoodAndBeverage => &[
            "1563805042-7684c019e1cb",
            "1621939514649-fcaf53e54b35",
            "1582515045388-a7da743873e1",
            "1610832958506-aa56368176cf",
            "1512621776951-a57141f2eefd",
        ],
        Category::Books => &[
            "1544947950-fa07a98d237f",
            "1512820790803-83ca734da794",
            "1532012197267-da84d127e765",
            "1495446815901-a7297e633e8d",
            "1476275466078-400a78c9877d",
        ],
        Category::Toys => &[
            "1566576912902-1d6db6e811e6",
            "1596461404969-9ae70f2830c1",
            "1587654780291-39c94048e692",
            "1558060370-d648dd0da3d6",
            "1500995617975-ea0131789096",
        ],
    }
}

/// Pick a random element of a non-empty slice.
fn pick<'a>(rng: &mut impl Rng, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or("")
}

/// The generated product catalog.
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Generate the full catalog: 13 products in each of the 8 categories.
    #[must_use]
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let mut products =
            Vec::with_capacity(Category::ALL.len() * ITEMS_PER_CATEGORY);
        let mut id_counter = 1_u32;

        for category in Category::ALL {
            for _ in 0..ITEMS_PER_CATEGORY {
                products.push(generate_product(&mut rng, category, id_counter));
                id_counter += 1;
            }
        }

        tracing::debug!(count = products.len(), "catalog generated");
        Self { products }
    }

    /// All products, in generation order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// All products in one category.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Case-insensitive search over product names and descriptions.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Product> {
        let needle = query.to_lowercase();
        self.products.iter().filter(move |p| {
            p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
    }

    /// All products currently on sale.
    pub fn on_sale(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_sale)
    }
}

fn generate_product(rng: &mut impl Rng, category: Category, id: u32) -> Product {
    let adjective = pick(rng, &ADJECTIVES);
    let noun = pick(rng, nouns(category));

    // Prices are generated in whole cents so they are exact from the start
    let price = Price::from_cents(rng.random_range(2000..=50000));
    let is_sale = rng.random_bool(0.3);
    let sale_price = is_sale.then(|| {
        // 20% off, rounded to a displayable amount
        Price::new((price.amount() * Decimal::new(8, 1)).round_dp(2))
    });

    let image_id = pick(rng, image_ids(category));

    Product {
        id: ProductId::new(format!("prod-{id}")),
        name: format!("{adjective} {noun}"),
        price,
        description: format!(
            "This {} {} is perfect for your needs. Crafted with care and designed to last.",
            adjective.to_lowercase(),
            noun.to_lowercase()
        ),
        category,
        image: format!("https://images.unsplash.com/photo-{image_id}?auto=format&fit=crop&w=600&q=80"),
        stock: rng.random_range(0..=50),
        shipping_estimate: if rng.random_bool(0.5) {
            "2-3 Business Days".to_string()
        } else {
            "5-7 Business Days".to_string()
        },
        is_sale,
        sale_price,
        details: generate_details(rng, category),
        rating: Decimal::new(rng.random_range(350..=500), 2),
        reviews: rng.random_range(5..=500),
    }
}

/// Category-specific attribute subsets.
fn generate_details(rng: &mut impl Rng, category: Category) -> BTreeMap<String, DetailValue> {
    let mut details = BTreeMap::new();
    match category {
        Category::Electronics => {
            details.insert(
                "Warranty".to_string(),
                DetailValue::from(format!("{} Years", rng.random_range(1..=3))),
            );
            details.insert(
                "Battery Life".to_string(),
                DetailValue::from(format!("{} Hours", rng.random_range(10..=48))),
            );
        }
        Category::Books => {
            details.insert(
                "Pages".to_string(),
                DetailValue::from(rng.random_range(200..=800_i64)),
            );
            details.insert(
                "Author".to_string(),
                DetailValue::from(format!("Author {}", rng.random_range(1..=50))),
            );
        }
        Category::Toys => {
            details.insert(
                "Age".to_string(),
                DetailValue::from(format!("{}+", rng.random_range(3..=12))),
            );
            details.insert(
                "Material".to_string(),
                DetailValue::from("Safe Plastic/Wood"),
            );
        }
        Category::Fashion => {
            details.insert(
                "Material".to_string(),
                DetailValue::from(pick(rng, &["Cotton", "Polyester", "Leather", "Denim"])),
            );
            details.insert("Care".to_string(), DetailValue::from("Machine Wash"));
        }
        _ => {}
    }
    details
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_generates_thirteen_products_per_category() {
        let catalog = Catalog::generate();
        assert_eq!(catalog.len(), 104);

        for category in Category::ALL {
            assert_eq!(catalog.by_category(category).count(), ITEMS_PER_CATEGORY);
        }
    }

    #[test]
    fn test_ids_are_unique_and_prefixed() {
        let catalog = Catalog::generate();
        let ids: HashSet<&str> = catalog.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
        assert!(ids.iter().all(|id| id.starts_with("prod-")));
    }

    #[test]
    fn test_sale_price_only_when_on_sale() {
        let catalog = Catalog::generate();
        for product in catalog.products() {
            if product.is_sale {
                let sale = product.sale_price.expect("sale product has sale price");
                assert!(sale <= product.price);
            } else {
                assert!(product.sale_price.is_none());
            }
        }
    }

    #[test]
    fn test_generated_ranges() {
        let catalog = Catalog::generate();
        for product in catalog.products() {
            assert!(product.price >= Price::from_cents(2000));
            assert!(product.price <= Price::from_cents(50000));
            assert!(product.stock <= 50);
            assert!(product.rating >= Decimal::new(350, 2));
            assert!(product.rating <= Decimal::new(500, 2));
            assert!((5..=500).contains(&product.reviews));
        }
    }

    #[test]
    fn test_category_detail_subsets() {
        let catalog = Catalog::generate();
        for product in catalog.products() {
            match product.category {
                Category::Electronics => {
                    assert!(product.details.contains_key("Warranty"));
                    assert!(product.details.contains_key("Battery Life"));
                }
                Category::Books => {
                    assert!(product.details.contains_key("Pages"));
                    assert!(product.details.contains_key("Author"));
                }
                Category::Toys => {
                    assert!(product.details.contains_key("Age"));
                    assert!(product.details.contains_key("Material"));
                }
                Category::Fashion => {
                    assert!(product.details.contains_key("Material"));
                    assert!(product.details.contains_key("Care"));
                }
                _ => assert!(product.details.is_empty()),
            }
        }
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::generate();
        let first = catalog.products().first().unwrap().clone();
        assert_eq!(catalog.get(&first.id), Some(&first));
        assert!(catalog.get(&ProductId::new("prod-9999")).is_none());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = Catalog::generate();
        let first = catalog.products().first().unwrap();
        let query = first.name.to_uppercase();

        let hits: Vec<_> = catalog.search(&query).collect();
        assert!(hits.iter().any(|p| p.id == first.id));
    }

    #[test]
    fn test_on_sale_filter() {
        let catalog = Catalog::generate();
        assert!(catalog.on_sale().all(|p| p.is_sale));
    }
}
