//! First-run demonstration dataset
//!
//! Seeded only when the persisted collection is empty, so reseeding is
//! idempotent. All sample records are pre-approved; two are featured.

use chrono::Utc;
use uuid::Uuid;

use crate::geo::GeoPoint;
use crate::model::{Contact, Record, Schedule};

struct Sample {
    name: &'static str,
    category: &'static str,
    address: &'static str,
    city: &'static str,
    region: &'static str,
    lat: f64,
    lng: f64,
    featured: bool,
    schedules: &'static [(&'static str, &'static [&'static str])],
    responsible: &'static str,
    phone: &'static str,
    email: &'static str,
}

const SAMPLES: &[Sample] = &[
    Sample {
        name: "Igreja Batista Central",
        category: "Batista",
        address: "Rua das Flores, 123",
        city: "São Paulo",
        region: "SP",
        lat: -23.5505,
        lng: -46.6333,
        featured: true,
        schedules: &[("Domingo", &["09:00", "18:00"]), ("Quarta", &["19:30"])],
        responsible: "João Silva",
        phone: "(11) 99999-9999",
        email: "joao@igreja.com",
    },
    Sample {
        name: "Igreja Presbiteriana do Brasil",
        category: "Presbiteriana",
        address: "Av. Paulista, 1000",
        city: "São Paulo",
        region: "SP",
        lat: -23.5631,
        lng: -46.6544,
        featured: false,
        schedules: &[("Domingo", &["10:00", "19:00"])],
        responsible: "Maria Santos",
        phone: "(11) 88888-8888",
        email: "maria@igreja.com",
    },
    Sample {
        name: "Igreja Metodista Wesley",
        category: "Metodista",
        address: "Rua Augusta, 500",
        city: "Rio de Janeiro",
        region: "RJ",
        lat: -22.9068,
        lng: -43.1729,
        featured: false,
        schedules: &[("Domingo", &["09:30"]), ("Quinta", &["19:30"])],
        responsible: "Pedro Costa",
        phone: "(21) 77777-7777",
        email: "pedro@igreja.com",
    },
    Sample {
        name: "Igreja Luterana da Paz",
        category: "Luterana",
        address: "Rua da Paz, 200",
        city: "Porto Alegre",
        region: "RS",
        lat: -30.0346,
        lng: -51.2177,
        featured: false,
        schedules: &[("Domingo", &["09:00"])],
        responsible: "Ana Oliveira",
        phone: "(51) 66666-6666",
        email: "ana@igreja.com",
    },
    Sample {
        name: "Igreja Anglicana São João",
        category: "Anglicana",
        address: "Av. Beira Mar, 300",
        city: "Salvador",
        region: "BA",
        lat: -12.9714,
        lng: -38.5011,
        featured: true,
        schedules: &[("Domingo", &["08:30", "18:30"]), ("Quarta", &["19:00"])],
        responsible: "Carlos Lima",
        phone: "(71) 55555-5555",
        email: "carlos@igreja.com",
    },
];

/// Build the demonstration records with fresh ids and timestamps.
pub fn sample_records() -> Vec<Record> {
    let now = Utc::now();
    SAMPLES
        .iter()
        .map(|s| Record {
            id: Uuid::new_v4().to_string(),
            name: s.name.to_string(),
            category: s.category.to_string(),
            address: s.address.to_string(),
            city: s.city.to_string(),
            region: s.region.to_string(),
            neighborhood: None,
            coordinates: Some(GeoPoint::new(s.lat, s.lng)),
            contact: Contact {
                responsible: s.responsible.to_string(),
                phone: s.phone.to_string(),
                email: s.email.to_string(),
                whatsapp: s.phone.to_string(),
            },
            schedules: s
                .schedules
                .iter()
                .map(|(day, times)| {
                    Schedule::new(*day, times.iter().map(|t| t.to_string()).collect())
                })
                .collect(),
            approved: true,
            featured: s.featured,
            created_at: now,
            updated_at: now,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_records_are_approved() {
        assert!(sample_records().iter().all(|r| r.approved));
    }

    #[test]
    fn test_sample_records_have_unique_ids() {
        let records = sample_records();
        let mut ids: Vec<_> = records.iter().map(|r| r.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn test_sample_records_are_located() {
        assert!(sample_records().iter().all(|r| r.coordinates.is_some()));
    }

    #[test]
    fn test_two_samples_are_featured() {
        assert_eq!(sample_records().iter().filter(|r| r.featured).count(), 2);
    }
}
