use super::domain::BankDraft;

const LOGO_CDN: &str =
    "https://cdn.hesap.com/cdn-cgi/image/height=60,fit=contain,quality=80,format=webp/company/logos";

struct Partner {
    name: &'static str,
    logo: &'static str,
    campaign: &'static str,
    color: &'static str,
    interest_rate: Option<f64>,
    max_amount: f64,
}

const PARTNERS: &[Partner] = &[
    Partner {
        name: "Akbank",
        logo: "ac807fc1-b3e9-46f6-899d-ce70882e7f57.svg",
        campaign: "%0 faiz oranlı 3 Ay vadeli 25.000 TL'ye varan taksitli avans",
        color: "red",
        interest_rate: Some(2.09),
        max_amount: 125_000.0,
    },
    Partner {
        name: "QNB",
        logo: "f7fcb8e4-7b8e-4b5a-9c3d-2e1f4a6b8c9d.svg",
        campaign: "3 Ay vadeli 25.000 TL'ye varan nakit avans",
        color: "purple",
        interest_rate: Some(2.15),
        max_amount: 85_000.0,
    },
    Partner {
        name: "TEB",
        logo: "b2d4c6e8-9a1b-4c5d-8e7f-3a2b5c8d9e0f.svg",
        campaign: "%0 faiz oranlı 3 Ay vadeli 25.000 TL'ye varan nakit avans",
        color: "green",
        interest_rate: Some(2.30),
        max_amount: 105_000.0,
    },
    Partner {
        name: "DenizBank",
        logo: "e5f7a9b1-2c3d-4e5f-9a8b-6c7d8e9f0a1b.svg",
        campaign: "3 Ay vadeli 65.000 TL'ye varan kredi",
        color: "cyan",
        interest_rate: Some(2.25),
        max_amount: 95_000.0,
    },
    Partner {
        name: "Garanti BBVA",
        logo: "c8d0e2f4-5a6b-7c8d-0e1f-9a2b3c4d5e6f.svg",
        campaign: "Bonus kart sahiplerine özel avantajlar",
        color: "green",
        interest_rate: Some(2.18),
        max_amount: 150_000.0,
    },
    Partner {
        name: "Türkiye İş Bankası",
        logo: "a1b2c3d4-e5f6-7a8b-9c0d-1e2f3a4b5c6d.svg",
        campaign: "Maximum kart avantajı",
        color: "blue",
        interest_rate: Some(2.12),
        max_amount: 120_000.0,
    },
    Partner {
        name: "Albaraka",
        logo: "d7e8f9a0-b1c2-3d4e-5f6a-7b8c9d0e1f2a.svg",
        campaign: "Katılım bankacılığı avantajı",
        color: "gray",
        interest_rate: Some(2.32),
        max_amount: 70_000.0,
    },
    Partner {
        name: "Enpara",
        logo: "f0a1b2c3-d4e5-6f7a-8b9c-0d1e2f3a4b5c.svg",
        campaign: "Dijital bankacılık fırsatı",
        color: "pink",
        interest_rate: Some(2.22),
        max_amount: 75_000.0,
    },
    Partner {
        name: "ON",
        logo: "b3c4d5e6-f7a8-9b0c-1d2e-3f4a5b6c7d8e.svg",
        campaign: "Tamamen dijital deneyim",
        color: "green",
        interest_rate: Some(2.42),
        max_amount: 60_000.0,
    },
    Partner {
        name: "Getirfinans",
        logo: "e6f7a8b9-c0d1-2e3f-4a5b-6c7d8e9f0a1b.svg",
        campaign: "450.000 TL'ye varan kredi",
        color: "purple",
        interest_rate: None,
        max_amount: 450_000.0,
    },
];

/// Partner roster the service starts with unless seeding is disabled.
pub fn default_partners() -> Vec<BankDraft> {
    PARTNERS
        .iter()
        .map(|partner| BankDraft {
            name: partner.name.to_string(),
            logo: format!("{LOGO_CDN}/{}", partner.logo),
            campaign: partner.campaign.to_string(),
            color: partner.color.to_string(),
            is_active: true,
            max_applications: None,
            interest_rate: partner.interest_rate,
            max_amount: Some(partner.max_amount),
        })
        .collect()
}
