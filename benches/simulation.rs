use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use monopoly_rs::agents::AgentTable;
use monopoly_rs::game::Game;
use monopoly_rs::player::Account;
use monopoly_rs::property::{Property, PropertyState};
use monopoly_rs::rules::Rules;
use monopoly_rs::token::Token;

fn bench_random_turns(c: &mut Criterion) {
    let mut g = c.benchmark_group("random_turns");
    for players in [2usize, 4, 8] {
        let tokens = &Token::ALL[..players];
        g.bench_with_input(BenchmarkId::new("players", players), &tokens, |b, tokens| {
            b.iter(|| {
                let mut game = Game::seeded(tokens, Rules::default(), 42).unwrap();
                let mut table = AgentTable::random(tokens.len(), Some(42), 0.7);
                black_box(table.play_turns(&mut game, 200).unwrap())
            })
        });
    }
    g.finish();
}

fn bench_rent_table(c: &mut Criterion) {
    c.bench_function("rent_all_states", |b| {
        b.iter(|| {
            let mut total = 0;
            for p in Property::ALL {
                for s in PropertyState::ALL {
                    total += black_box(p).rent(black_box(s));
                }
            }
            total
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game = Game::seeded(&Token::ALL[..4], Rules::default(), 3).unwrap();
    let mut table = AgentTable::random(4, Some(3), 1.0);
    table.play_turns(&mut game, 100).unwrap();
    c.bench_function("snapshot_accounts", |b| {
        b.iter(|| game.players().iter().map(|p| p.snapshot()).collect::<Vec<Account>>())
    });
}

criterion_group!(benches, bench_random_turns, bench_rent_table, bench_snapshot);
criterion_main!(benches);
