use std::hint::black_box;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use criterion::{criterion_group, criterion_main, Criterion};

use screening_system::config::LayoutConfig;
use screening_system::layout::{generate_seats, recompute_numbers};
use screening_system::scheduling::{find_gap_violation, find_overlap, SchedulePolicy};
use screening_system::{Movie, Showtime, ShowtimeDraft, TimeSlot};

fn time_of(minutes: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).unwrap()
}

fn day_slots(count: usize) -> Vec<TimeSlot> {
    (0..count)
        .map(|i| {
            let start = (i as u32 % 40) * 36;
            TimeSlot {
                room_id: (i as i64 % 8) + 1,
                show_date: NaiveDate::from_ymd_opt(2024, 6, (i as u32 / 40) + 1).unwrap(),
                start_time: time_of(start),
                end_time: time_of(start + 30),
            }
        })
        .collect()
}

fn packed_schedule(count: usize) -> Vec<Showtime> {
    (0..count)
        .map(|i| {
            let start = 480 + (i as u32 % 10) * 90;
            Showtime {
                id: i as i64 + 1,
                room_id: 1,
                movie_id: 7,
                show_date: NaiveDate::from_ymd_opt(2024, 6, (i as u32 / 10) + 1).unwrap(),
                start_time: time_of(start),
                end_time: time_of(start + 80),
                base_price: 12.5,
            }
        })
        .collect()
}

fn bench_layout(c: &mut Criterion) {
    let config = LayoutConfig::default();

    c.bench_function("generate_seats_20x20", |b| {
        b.iter(|| generate_seats(black_box(20), black_box(20), &config).unwrap())
    });

    let mut seats = generate_seats(20, 20, &config).unwrap();
    for seat in seats.iter_mut().step_by(7) {
        seat.is_enabled = false;
    }
    c.bench_function("recompute_numbers_400_seats", |b| {
        b.iter(|| recompute_numbers(black_box(&mut seats)))
    });
}

fn bench_conflicts(c: &mut Criterion) {
    let slots = day_slots(200);
    let candidate = TimeSlot {
        room_id: 4,
        show_date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
        start_time: time_of(23 * 60),
        end_time: time_of(23 * 60 + 30),
    };

    c.bench_function("find_overlap_200_slots", |b| {
        b.iter(|| find_overlap(black_box(&slots), black_box(&candidate)))
    });
    c.bench_function("gap_check_200_slots", |b| {
        b.iter(|| find_gap_violation(black_box(&slots), black_box(&candidate), Duration::minutes(15)))
    });
}

fn bench_policy(c: &mut Criterion) {
    let policy = SchedulePolicy::new(15, 30, 60);
    let persisted = packed_schedule(100);
    let movie = Movie {
        id: 7,
        title: "Interstate 60".to_string(),
        duration_minutes: 75,
        release_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
    };
    let draft = ShowtimeDraft {
        room_id: 1,
        movie_id: 7,
        show_date: NaiveDate::from_ymd_opt(2024, 6, 20).unwrap(),
        start_time: time_of(14 * 60),
        end_time: time_of(15 * 60 + 20),
        base_price: 12.5,
    };
    let now: NaiveDateTime = NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();

    c.bench_function("validate_draft_100_persisted", |b| {
        b.iter(|| policy.validate_draft(black_box(&draft), &movie, &persisted, &[], now))
    });
}

criterion_group!(benches, bench_layout, bench_conflicts, bench_policy);
criterion_main!(benches);
