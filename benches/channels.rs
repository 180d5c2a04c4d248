#[macro_use]
extern crate bencher;
extern crate qif_channels;

use qif_channels::channels::*;
use bencher::Bencher;


/// Winner of 8 voters among 3 candidates: 6561 inputs.
fn bench_winner_channel(b: &mut Bencher) {
    let space = InstanceSpace::new(8, 3).unwrap();
    let winner = Winner::new(3, TieBreak::LowestIndex).unwrap();
    let limits = ChannelLimits::default();

    b.iter(|| build_channel(&space, &winner, &limits).unwrap());
}

/// Full tally of 6 voters among 4 candidates: 4096 inputs, 84 outputs.
fn bench_tally_channel(b: &mut Bencher) {
    let space = InstanceSpace::new(6, 4).unwrap();
    let tally = FullTally::new(6, 4).unwrap();
    let limits = ChannelLimits::default();

    b.iter(|| build_channel(&space, &tally, &limits).unwrap());
}

fn bench_enumerate_tallies(b: &mut Bencher) {
    b.iter(|| enumerate_tallies(12, 5));
}

/// Noisy count over a database of 7 rows with 3 values.
fn bench_noisy_count_channel(b: &mut Bencher) {
    let space = InstanceSpace::new(7, 3).unwrap();
    let count = CountOf::new(0, 7);
    let kernel = GeometricKernel::new(1. / 3.).unwrap();
    let limits = ChannelLimits::default();

    b.iter(|| build_noisy_channel(&space, &count, &kernel, &limits).unwrap());
}

benchmark_group!(benches, bench_winner_channel, bench_tally_channel,
                 bench_enumerate_tallies, bench_noisy_count_channel);
benchmark_main!(benches);
