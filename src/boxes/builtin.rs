//! The built-in classroom content table
//!
//! Twenty-four boxes of integer-arithmetic material (temperatures, debts,
//! submarines, number lines) interleaved with bonus and zonk boxes. The
//! strings are the classroom deck this crate ships with and are not
//! localized.

use super::{
    answer::AnswerKey,
    catalog::{BonusBox, BoxCatalog, BoxContent, BoxDefinition, QuestionBox, ZonkBox},
    id::BoxId,
};

fn question(id: u32, title: &str, description: &str, answer: i64, points: i32) -> BoxDefinition {
    BoxDefinition {
        id: BoxId::new(id),
        title: title.to_owned(),
        description: description.to_owned(),
        content: BoxContent::Question(QuestionBox {
            expected_answer: AnswerKey::Number(answer),
            points,
            hint: None,
        }),
    }
}

fn bonus(id: u32, title: &str, description: &str, points: i32) -> BoxDefinition {
    BoxDefinition {
        id: BoxId::new(id),
        title: title.to_owned(),
        description: description.to_owned(),
        content: BoxContent::Bonus(BonusBox { points }),
    }
}

fn zonk(id: u32, title: &str, description: &str, points: i32) -> BoxDefinition {
    BoxDefinition {
        id: BoxId::new(id),
        title: title.to_owned(),
        description: description.to_owned(),
        content: BoxContent::Zonk(ZonkBox { points }),
    }
}

/// Builds the built-in 24-box catalog
///
/// # Panics
///
/// Panics if the built-in table fails validation, which cannot happen for
/// the shipped data.
pub fn catalog() -> BoxCatalog {
    BoxCatalog::new(vec![
        question(
            1,
            "Suhu Udara",
            "Suhu awal 30°C, lalu turun 35°C. Berapa suhu sekarang?",
            -5,
            10,
        ),
        question(
            2,
            "Kapal Selam",
            "Sebuah kapal selam berada di kedalaman 20m (-20m). Jika turun lagi 30m, di posisi mana kapal sekarang?",
            -50,
            10,
        ),
        question(
            3,
            "Hutang & Bayar",
            "Budi punya hutang 50.000 (-50.000). Ia membayar 20.000. Berapa sisa hutang Budi?",
            -30000,
            15,
        ),
        zonk(
            4,
            "ZONK!",
            "Aduh! Kotak ini berisi jebakan. Poin berkurang 10!",
            -10,
        ),
        bonus(5, "BONUS!", "Hore! Kamu beruntung. Poin gratis +50!", 50),
        question(
            6,
            "Temperatur Es",
            "Suhu es batu -5°C. Dibiarkan di luar hingga naik 12°C. Berapa suhu es sekarang?",
            7,
            10,
        ),
        question(
            7,
            "Lift Gedung",
            "Andi berada di lantai 2. Ia turun 5 lantai untuk ke parkiran bawah tanah. Di lantai berapa Andi sekarang?",
            -3,
            10,
        ),
        question(
            8,
            "Perkalian Negatif",
            "Berapakah hasil dari -4 x 8?",
            -32,
            15,
        ),
        zonk(9, "ZONK!", "Ups! Terperangkap di kotak kosong. -5 poin.", -5),
        question(
            10,
            "Pembagian Bilangan",
            "Berapakah hasil dari -40 : (-5)?",
            8,
            15,
        ),
        bonus(11, "SUPER BONUS!", "Ledakan Poin! +100 poin untukmu!", 100),
        question(12, "Gabungan", "Hitunglah: (-10) + 5 - (-3) = ...", -2, 20),
        question(
            13,
            "Suhu Puncak",
            "Di siang hari suhu 15°C, malam harinya suhu menjadi -2°C. Berapa selisih penurunannya?",
            17,
            20,
        ),
        zonk(14, "ZONK!", "Kotak ini meledak! -15 poin.", -15),
        question(
            15,
            "Toko Kelontong",
            "Toko rugi 200.000 hari ini, tapi untung 500.000 besoknya. Berapa posisi keuangan total?",
            300000,
            15,
        ),
        bonus(
            16,
            "REJEKI NOMPLOK",
            "Selamat! Kamu dapat tambahan +30 poin.",
            30,
        ),
        question(
            17,
            "Garis Bilangan",
            "Dari titik 0, melangkah ke kiri 7 satuan lalu ke kanan 10 satuan. Di titik mana sekarang?",
            3,
            15,
        ),
        question(
            18,
            "Perkalian Campuran",
            "Berapakah hasil dari (-6) x (-7)?",
            42,
            15,
        ),
        zonk(19, "LUBANG HITAM", "Poinmu tersedot! -20 poin.", -20),
        question(
            20,
            "Operasi Pembagian",
            "Hasil dari 144 : (-12) adalah...",
            -12,
            15,
        ),
        question(
            21,
            "Suhu Freezer",
            "Suhu awal freezer 4°C. Setelah dinyalakan turun 10°C. Berapa suhu sekarang?",
            -6,
            10,
        ),
        bonus(
            22,
            "KOTAK AJAIB",
            "Selamat! Kamu menemukan harta karun +75 poin.",
            75,
        ),
        question(
            23,
            "Soal Cerita",
            "Seorang penyelam di -15m naik 8m. Dimana posisi penyelam sekarang?",
            -7,
            15,
        ),
        question(
            24,
            "Matematika Dasar",
            "Hasil dari -25 + (-15) adalah...",
            -40,
            10,
        ),
    ])
    .expect("built-in table is valid")
}
