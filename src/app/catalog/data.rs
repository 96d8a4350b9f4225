//! 静态商品数据

use super::model::{Category, Product};

pub static CATEGORIES: [Category; 5] = [
    Category { id: "all", name: "All Fabrics" },
    Category { id: "cotton", name: "Cotton" },
    Category { id: "silk", name: "Silk" },
    Category { id: "linen", name: "Linen" },
    Category { id: "wool", name: "Wool Fabrics" },
];

const TAGS: &[&str] = &["retail", "wholesale"];

pub static PRODUCTS: [Product; 6] = [
    Product {
        id: "1",
        name: "Premium Cotton Fabric",
        price: 850,
        bulk_price: 680,
        image: "/category/1.jpg",
        category: "cotton",
        material: "100% Cotton",
        width: "44 inches",
        gsm: "140 GSM",
        colors: &["Red", "Blue", "Green"],
        in_stock: true,
        tags: TAGS,
        description: "This premium cotton fabric is perfect for fashion garments, home décor, and craft projects. Soft to touch with excellent durability and vibrant colors.",
        specifications: &[
            ("Material", "100% Cotton"),
            ("Width", "44 inches"),
            ("GSM", "140 GSM"),
            ("Weave", "Plain"),
            ("Care", "Machine wash cold"),
            ("Origin", "Tamil Nadu, India"),
        ],
    },
    Product {
        id: "2",
        name: "Silk Blend Saree Fabric",
        price: 1200,
        bulk_price: 950,
        image: "/category/2.jpg",
        category: "silk",
        material: "Silk Blend",
        width: "44 inches",
        gsm: "160 GSM",
        colors: &["Gold", "Maroon", "Purple"],
        in_stock: true,
        tags: TAGS,
        description: "Luxurious silk blend fabric perfect for traditional sarees and ethnic wear. Features beautiful drape and lustrous finish.",
        specifications: &[
            ("Material", "Silk Blend"),
            ("Width", "44 inches"),
            ("GSM", "160 GSM"),
            ("Weave", "Satin"),
            ("Care", "Dry clean recommended"),
            ("Origin", "Karnataka, India"),
        ],
    },
    Product {
        id: "3",
        name: "Pure Linen Fabric",
        price: 950,
        bulk_price: 750,
        image: "/category/3.jpg",
        category: "linen",
        material: "100% Linen",
        width: "44 inches",
        gsm: "120 GSM",
        colors: &["Natural", "White", "Beige"],
        in_stock: true,
        tags: TAGS,
        description: "Natural linen fabric with breathable texture, perfect for summer clothing and home textiles. Eco-friendly and sustainable choice.",
        specifications: &[
            ("Material", "100% Linen"),
            ("Width", "44 inches"),
            ("GSM", "120 GSM"),
            ("Weave", "Plain"),
            ("Care", "Machine wash gentle"),
            ("Origin", "West Bengal, India"),
        ],
    },
    Product {
        id: "4",
        name: "Organic Cotton Voile",
        price: 720,
        bulk_price: 580,
        image: "/category/4.jpg",
        category: "cotton",
        material: "Organic Cotton",
        width: "44 inches",
        gsm: "100 GSM",
        colors: &["White", "Cream", "Light Blue"],
        in_stock: true,
        tags: TAGS,
        description: "Lightweight organic cotton voile with soft hand feel. Perfect for delicate garments, curtains, and summer wear.",
        specifications: &[
            ("Material", "Organic Cotton"),
            ("Width", "44 inches"),
            ("GSM", "100 GSM"),
            ("Weave", "Plain"),
            ("Care", "Machine wash cold"),
            ("Origin", "Gujarat, India"),
        ],
    },
    Product {
        id: "5",
        name: "Luxury Silk Dupioni",
        price: 1500,
        bulk_price: 1200,
        image: "/category/5.jpg",
        category: "silk",
        material: "Pure Silk",
        width: "44 inches",
        gsm: "180 GSM",
        colors: &["Royal Blue", "Emerald", "Burgundy"],
        in_stock: true,
        tags: TAGS,
        description: "Premium silk dupioni with characteristic slub texture. Ideal for formal wear, evening gowns, and luxury home décor.",
        specifications: &[
            ("Material", "Pure Silk"),
            ("Width", "44 inches"),
            ("GSM", "180 GSM"),
            ("Weave", "Dupioni"),
            ("Care", "Dry clean only"),
            ("Origin", "Karnataka, India"),
        ],
    },
    Product {
        id: "6",
        name: "Premium Wool Blend Fabric",
        price: 1100,
        bulk_price: 880,
        image: "/category/6.jpg",
        category: "wool",
        material: "Wool Blend",
        width: "44 inches",
        gsm: "220 GSM",
        colors: &["Charcoal", "Navy", "Brown"],
        in_stock: true,
        tags: TAGS,
        description: "High-quality wool blend fabric perfect for tailored garments, coats, and winter wear. Excellent drape and warmth retention.",
        specifications: &[
            ("Material", "Wool Blend"),
            ("Width", "44 inches"),
            ("GSM", "220 GSM"),
            ("Weave", "Twill"),
            ("Care", "Dry clean recommended"),
            ("Origin", "Punjab, India"),
        ],
    },
];
