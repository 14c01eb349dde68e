//! Static make → model → variant table with list prices (PKR).

use super::{CatalogMake, CatalogModel, CatalogVariant};

pub static CATALOG: &[CatalogMake] = &[
    CatalogMake {
        name: "Toyota",
        models: &[
            CatalogModel {
                name: "Corolla",
                variants: &[
                    CatalogVariant { name: "GLi 1.3", base_price: 3_200_000 },
                    CatalogVariant { name: "XLi 1.3", base_price: 3_400_000 },
                    CatalogVariant { name: "Altis 1.6", base_price: 4_500_000 },
                    CatalogVariant { name: "Altis Grande 1.8", base_price: 5_500_000 },
                    CatalogVariant { name: "Cross 1.8", base_price: 6_500_000 },
                ],
            },
            CatalogModel {
                name: "Yaris",
                variants: &[
                    CatalogVariant { name: "GLi 1.3", base_price: 2_800_000 },
                    CatalogVariant { name: "ATIV X 1.3", base_price: 3_200_000 },
                    CatalogVariant { name: "ATIV X CVT 1.5", base_price: 3_800_000 },
                ],
            },
            CatalogModel {
                name: "Camry",
                variants: &[
                    CatalogVariant { name: "2.5L", base_price: 12_500_000 },
                    CatalogVariant { name: "Hybrid", base_price: 15_000_000 },
                ],
            },
            CatalogModel {
                name: "Fortuner",
                variants: &[
                    CatalogVariant { name: "2.7 V", base_price: 9_500_000 },
                    CatalogVariant { name: "2.8 Sigma 4", base_price: 12_000_000 },
                    CatalogVariant { name: "Legender", base_price: 14_500_000 },
                ],
            },
            CatalogModel {
                name: "Land Cruiser",
                variants: &[
                    CatalogVariant { name: "VX", base_price: 35_000_000 },
                    CatalogVariant { name: "ZX", base_price: 45_000_000 },
                    CatalogVariant { name: "GR Sport", base_price: 55_000_000 },
                ],
            },
            CatalogModel {
                name: "Prado",
                variants: &[
                    CatalogVariant { name: "TX", base_price: 22_000_000 },
                    CatalogVariant { name: "TXL", base_price: 28_000_000 },
                    CatalogVariant { name: "VX", base_price: 32_000_000 },
                ],
            },
            CatalogModel {
                name: "Hilux",
                variants: &[
                    CatalogVariant { name: "Single Cab", base_price: 5_500_000 },
                    CatalogVariant { name: "Revo G", base_price: 7_500_000 },
                    CatalogVariant { name: "Revo V", base_price: 9_000_000 },
                    CatalogVariant { name: "Rocco", base_price: 11_000_000 },
                ],
            },
        ],
    },
    CatalogMake {
        name: "Honda",
        models: &[
            CatalogModel {
                name: "Civic",
                variants: &[
                    CatalogVariant { name: "Standard 1.5T", base_price: 6_500_000 },
                    CatalogVariant { name: "Oriel 1.5T", base_price: 7_200_000 },
                    CatalogVariant { name: "RS 1.5T", base_price: 8_500_000 },
                ],
            },
            CatalogModel {
                name: "City",
                variants: &[
                    CatalogVariant { name: "1.2L Standard", base_price: 3_200_000 },
                    CatalogVariant { name: "1.2L Aspire", base_price: 3_600_000 },
                    CatalogVariant { name: "1.5L Aspire", base_price: 4_200_000 },
                ],
            },
            CatalogModel {
                name: "Accord",
                variants: &[
                    CatalogVariant { name: "2.0T Sport", base_price: 14_000_000 },
                    CatalogVariant { name: "Hybrid", base_price: 16_500_000 },
                ],
            },
            CatalogModel {
                name: "BR-V",
                variants: &[
                    CatalogVariant { name: "S", base_price: 4_200_000 },
                    CatalogVariant { name: "i-VTEC S", base_price: 4_800_000 },
                ],
            },
            CatalogModel {
                name: "HR-V",
                variants: &[
                    CatalogVariant { name: "Standard", base_price: 6_800_000 },
                    CatalogVariant { name: "AWD", base_price: 8_200_000 },
                ],
            },
            CatalogModel {
                name: "Vezel",
                variants: &[
                    CatalogVariant { name: "Hybrid X", base_price: 6_500_000 },
                    CatalogVariant { name: "Hybrid Z", base_price: 7_500_000 },
                ],
            },
        ],
    },
    CatalogMake {
        name: "Suzuki",
        models: &[
            CatalogModel {
                name: "Alto",
                variants: &[
                    CatalogVariant { name: "VX", base_price: 1_850_000 },
                    CatalogVariant { name: "VXR", base_price: 2_100_000 },
                    CatalogVariant { name: "VXL AGS", base_price: 2_350_000 },
                ],
            },
            CatalogModel {
                name: "Cultus",
                variants: &[
                    CatalogVariant { name: "VXR", base_price: 2_400_000 },
                    CatalogVariant { name: "VXL", base_price: 2_700_000 },
                    CatalogVariant { name: "AGS", base_price: 2_900_000 },
                ],
            },
            CatalogModel {
                name: "Swift",
                variants: &[
                    CatalogVariant { name: "GL Manual", base_price: 3_100_000 },
                    CatalogVariant { name: "GL CVT", base_price: 3_400_000 },
                    CatalogVariant { name: "GLX CVT", base_price: 3_700_000 },
                ],
            },
            CatalogModel {
                name: "Wagon R",
                variants: &[
                    CatalogVariant { name: "VXR", base_price: 2_500_000 },
                    CatalogVariant { name: "VXL", base_price: 2_800_000 },
                    CatalogVariant { name: "AGS", base_price: 3_000_000 },
                ],
            },
            CatalogModel {
                name: "Jimny",
                variants: &[
                    CatalogVariant { name: "GL", base_price: 6_500_000 },
                    CatalogVariant { name: "JLSX", base_price: 7_200_000 },
                ],
            },
            CatalogModel {
                name: "Vitara",
                variants: &[
                    CatalogVariant { name: "GLX", base_price: 8_500_000 },
                ],
            },
        ],
    },
    CatalogMake {
        name: "Hyundai",
        models: &[
            CatalogModel {
                name: "Elantra",
                variants: &[
                    CatalogVariant { name: "GL 1.6", base_price: 5_500_000 },
                    CatalogVariant { name: "GLS 2.0", base_price: 6_200_000 },
                ],
            },
            CatalogModel {
                name: "Sonata",
                variants: &[
                    CatalogVariant { name: "2.0 GLS", base_price: 8_500_000 },
                    CatalogVariant { name: "2.5 Sport", base_price: 10_500_000 },
                ],
            },
            CatalogModel {
                name: "Tucson",
                variants: &[
                    CatalogVariant { name: "GLS Sport FWD", base_price: 7_500_000 },
                    CatalogVariant { name: "Ultimate AWD", base_price: 9_500_000 },
                ],
            },
            CatalogModel {
                name: "Santa Fe",
                variants: &[
                    CatalogVariant { name: "2.4 GDI", base_price: 12_500_000 },
                    CatalogVariant { name: "3.5 V6", base_price: 15_000_000 },
                ],
            },
            CatalogModel {
                name: "Staria",
                variants: &[
                    CatalogVariant { name: "Premium", base_price: 13_500_000 },
                ],
            },
        ],
    },
    CatalogMake {
        name: "KIA",
        models: &[
            CatalogModel {
                name: "Picanto",
                variants: &[
                    CatalogVariant { name: "1.0 AT", base_price: 3_200_000 },
                ],
            },
            CatalogModel {
                name: "Stonic",
                variants: &[
                    CatalogVariant { name: "EX", base_price: 5_500_000 },
                    CatalogVariant { name: "EX+", base_price: 6_200_000 },
                ],
            },
            CatalogModel {
                name: "Sportage",
                variants: &[
                    CatalogVariant { name: "Alpha", base_price: 7_500_000 },
                    CatalogVariant { name: "FWD", base_price: 9_500_000 },
                    CatalogVariant { name: "AWD", base_price: 11_500_000 },
                ],
            },
            CatalogModel {
                name: "Sorento",
                variants: &[
                    CatalogVariant { name: "2.4 FWD", base_price: 12_500_000 },
                    CatalogVariant { name: "3.5 AWD", base_price: 15_500_000 },
                ],
            },
            CatalogModel {
                name: "Carnival",
                variants: &[
                    CatalogVariant { name: "Grand 7S", base_price: 16_500_000 },
                    CatalogVariant { name: "Grand 8S", base_price: 18_500_000 },
                ],
            },
        ],
    },
    CatalogMake {
        name: "Changan",
        models: &[
            CatalogModel {
                name: "Alsvin",
                variants: &[
                    CatalogVariant { name: "Comfort", base_price: 3_000_000 },
                    CatalogVariant { name: "Lumiere", base_price: 3_400_000 },
                ],
            },
            CatalogModel {
                name: "Oshan X7",
                variants: &[
                    CatalogVariant { name: "Comfort", base_price: 5_500_000 },
                    CatalogVariant { name: "FutureSense", base_price: 6_500_000 },
                ],
            },
            CatalogModel {
                name: "Uni-T",
                variants: &[
                    CatalogVariant { name: "Standard", base_price: 6_000_000 },
                ],
            },
            CatalogModel {
                name: "Karvaan",
                variants: &[
                    CatalogVariant { name: "Base", base_price: 2_200_000 },
                    CatalogVariant { name: "Plus", base_price: 2_500_000 },
                ],
            },
        ],
    },
    CatalogMake {
        name: "MG",
        models: &[
            CatalogModel {
                name: "ZS",
                variants: &[
                    CatalogVariant { name: "1.5L", base_price: 4_800_000 },
                    CatalogVariant { name: "EV", base_price: 6_500_000 },
                ],
            },
            CatalogModel {
                name: "HS",
                variants: &[
                    CatalogVariant { name: "Excite", base_price: 6_500_000 },
                    CatalogVariant { name: "Essence", base_price: 7_500_000 },
                ],
            },
            CatalogModel {
                name: "5",
                variants: &[
                    CatalogVariant { name: "Excite", base_price: 4_200_000 },
                ],
            },
        ],
    },
    CatalogMake {
        name: "Proton",
        models: &[
            CatalogModel {
                name: "Saga",
                variants: &[
                    CatalogVariant { name: "Standard AT", base_price: 2_800_000 },
                    CatalogVariant { name: "Ace AT", base_price: 3_200_000 },
                ],
            },
            CatalogModel {
                name: "X70",
                variants: &[
                    CatalogVariant { name: "Executive FWD", base_price: 6_500_000 },
                    CatalogVariant { name: "Premium AWD", base_price: 8_500_000 },
                ],
            },
        ],
    },
    CatalogMake {
        name: "DFSK",
        models: &[
            CatalogModel {
                name: "Glory 580",
                variants: &[
                    CatalogVariant { name: "1.5T CVT", base_price: 5_500_000 },
                    CatalogVariant { name: "Pro", base_price: 6_000_000 },
                ],
            },
        ],
    },
    CatalogMake {
        name: "Haval",
        models: &[
            CatalogModel {
                name: "H6",
                variants: &[
                    CatalogVariant { name: "2.0T", base_price: 8_500_000 },
                ],
            },
            CatalogModel {
                name: "Jolion",
                variants: &[
                    CatalogVariant { name: "Active", base_price: 6_000_000 },
                    CatalogVariant { name: "Ultra", base_price: 7_000_000 },
                ],
            },
        ],
    },
];
