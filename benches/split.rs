use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use split_ease::{RoundingMode, Session, SessionEvent, SplitHistory, SplitInput, compute_split};

/// Generates keystroke-by-keystroke edits, as a live preview sees them.
///
/// Pattern (repeating):
/// 1. Type the bill one character at a time
/// 2. Set the party size
/// 3. Cycle the rounding mode
/// 4. Save
pub struct EventGenerator {
    remaining_splits: u32,
    pending: Vec<SessionEvent>,
    counter: u32,
}

impl EventGenerator {
    pub fn new(splits: u32) -> Self {
        Self {
            remaining_splits: splits,
            pending: Vec::new(),
            counter: 0,
        }
    }

    fn refill(&mut self) {
        self.counter += 1;
        let bill = format!("{}.{:02}", 10 + self.counter % 490, self.counter % 100);
        let rounding = match self.counter % 3 {
            0 => RoundingMode::None,
            1 => RoundingMode::Up,
            _ => RoundingMode::Down,
        };

        // pushed in reverse, popped from the back
        self.pending.push(SessionEvent::Save);
        self.pending.push(SessionEvent::SetRounding(rounding));
        self.pending
            .push(SessionEvent::SetPeople((2 + self.counter % 7).to_string()));
        for end in (1..=bill.len()).rev() {
            self.pending.push(SessionEvent::SetBill(bill[..end].to_string()));
        }
    }
}

impl Iterator for EventGenerator {
    type Item = SessionEvent;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending.is_empty() {
            if self.remaining_splits == 0 {
                return None;
            }
            self.remaining_splits -= 1;
            self.refill();
        }
        self.pending.pop()
    }
}

fn bench_compute_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_split");

    for rounding in [RoundingMode::None, RoundingMode::Up, RoundingMode::Down] {
        let input = SplitInput::new("1234.56", "7", "18.5").with_rounding(rounding);
        group.bench_with_input(
            BenchmarkId::from_parameter(rounding),
            &input,
            |b, input| b.iter(|| compute_split(black_box(input))),
        );
    }

    group.bench_function("unparseable", |b| {
        let input = SplitInput::new("abc", "", "");
        b.iter(|| compute_split(black_box(&input)));
    });

    group.finish();
}

fn bench_history_save(c: &mut Criterion) {
    let mut group = c.benchmark_group("history_save");

    for count in [100u32, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let input = SplitInput::new("100", "4", "15");
            let per_person = compute_split(&input);
            b.iter(|| {
                let mut history = SplitHistory::new();
                for _ in 0..count {
                    black_box(history.save(&input, per_person));
                }
                history
            });
        });
    }

    group.finish();
}

fn bench_session_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_replay");

    for splits in [100u32, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(splits), &splits, |b, &splits| {
            b.iter(|| {
                let mut session = Session::new();
                for event in EventGenerator::new(splits) {
                    session.apply(event);
                    black_box(session.preview());
                }
                session
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compute_split,
    bench_history_save,
    bench_session_replay,
);

criterion_main!(benches);
