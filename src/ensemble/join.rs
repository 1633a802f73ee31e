use crate::base::Base;
use crate::base::Tally;
use crate::complex::JoinSite;

/// the four complementary channels tested in order during
/// resolution. for channel (x, y) the owning entry contributes
/// its exterior y bases and every later entry its x bases.
const CHANNELS: [(Base, Base); 4] = [
    (Base::A, Base::T),
    (Base::T, Base::A),
    (Base::G, Base::C),
    (Base::C, Base::G),
];

/// a resolved bimolecular join: two entry positions in
/// iteration order plus the exterior base selected on each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinPick {
    pub first: usize,
    pub second: usize,
    pub first_site: JoinSite,
    pub second_site: JoinSite,
}

/// count of feasible first intermolecular pairings across all
/// ordered pairs of distinct entries. two linear passes: total
/// the tallies, then walk entries subtracting each tally before
/// multiplying, so each unordered pair is counted exactly once.
pub fn count(tallies: &[Tally]) -> u64 {
    if tallies.len() <= 1 {
        return 0;
    }
    let mut later = tallies.iter().copied().sum::<Tally>();
    let mut moves = 0;
    for tally in tallies.iter() {
        later -= *tally;
        moves += later.pairings(tally);
    }
    moves
}

/// map an integer deviate in [0, count) back to the concrete
/// join it indexes. deterministic given the deviate and the
/// entry order; windows are walked in the same order as count().
pub fn resolve(tallies: &[Tally], mut choice: u64) -> JoinPick {
    let mut later = tallies.iter().copied().sum::<Tally>();
    for (first, tally) in tallies.iter().enumerate() {
        later -= *tally;
        for (x, y) in CHANNELS {
            let window = (later.count(x) * tally.count(y)) as u64;
            if choice < window {
                for (second, partner) in tallies.iter().enumerate().skip(first + 1) {
                    let sub = (partner.count(x) * tally.count(y)) as u64;
                    if choice < sub {
                        let span = partner.count(x) as u64;
                        return JoinPick {
                            first,
                            second,
                            first_site: JoinSite {
                                base: y,
                                offset: (choice / span) as usize,
                            },
                            second_site: JoinSite {
                                base: x,
                                offset: (choice % span) as usize,
                            },
                        };
                    }
                    choice -= sub;
                }
                unreachable!("join window not found among partners");
            }
            choice -= window;
        }
    }
    unreachable!("join deviate exceeds the aggregate count");
}
