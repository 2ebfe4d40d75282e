//! Blog post catalog

use super::{date, Post};

/// All posts, newest first
pub fn all_posts() -> Vec<Post> {
    vec![
        Post {
            title: "Taming Flaky Integration Tests",
            excerpt: "Flaky tests erode trust faster than missing tests. A tour of the \
                      three failure classes behind almost every intermittent red build, \
                      and the habits that keep them out.",
            author: "Sam Okafor",
            date: date(2024, 3, 18),
            tags: &["testing", "ci", "practices"],
            body: r#"# Taming Flaky Integration Tests

A test suite that fails one run in fifty is worse than no suite at all:
every failure gets rerun instead of read, and the one real regression a
month hides behind the noise. Over a few years of tending CI for a
mid-sized service, nearly every flake I chased fell into one of three
classes.

## Class 1: Time

Anything that sleeps is a countdown to a red build. The classic shape:

```rust
submit_job(&client);
std::thread::sleep(Duration::from_millis(500));
assert!(job_finished(&client));
```

On a loaded runner, 500ms is nothing. The fix is never a bigger number;
it is replacing the sleep with an explicit condition.

### Poll, don't sleep

Wrap the assertion in a bounded retry loop that polls for the condition
and fails with a real message after a deadline. Every polling helper in
our suite prints the last observed state on timeout, which turns "it
failed again" into a bug report.

### Fake the clock

For unit-level timing logic, inject the clock. A scheduler tested against
a controllable clock runs in microseconds and never flakes, because time
only moves when the test says so.

## Class 2: Order

Tests that pass alone and fail together are leaking state: a shared
database, a static cache, an environment variable. Two habits help.

1. Give every test its own namespace - a fresh schema, a unique temp dir.
2. Run the suite shuffled in CI, so ordering bugs surface weekly instead
   of yearly.

> If a test needs another test to have run first, it is not a test; it is
> a step in an undocumented script.

## Class 3: The Outside World

Network calls to real services belong in a handful of marked smoke tests,
not in the main suite. Everything else talks to a local stub. The stub
does not have outages, rate limits, or scheduled maintenance; your
staging environment has all three.

## A Budget, Not a Vow

Zero flakes forever is not a realistic promise. A flake budget is: when
intermittent failures cross the line, the next engineering day goes to
the suite, not the feature. Trust in green is the whole point of having
tests, and it is cheaper to maintain than to rebuild.
"#,
        },
        Post {
            title: "A Field Guide to Code Review",
            excerpt: "Most review advice is about being nice. This is about being \
                      useful: what to read first, what to say, and when a comment \
                      should be a conversation instead.",
            author: "Sam Okafor",
            date: date(2024, 2, 6),
            tags: &["practices", "teams"],
            body: r#"# A Field Guide to Code Review

Review is the highest-leverage hour of the day when it is done well, and
a queue of rubber stamps when it is not. The difference is mostly
reading order and tone.

## Read in the Right Order

Do not start at the first file alphabetically. Start with:

1. The description - what does the author think this change does?
2. The tests - what does the change actually promise?
3. The interfaces - new types, new signatures, new configs.
4. Only then the implementation.

If the description and the tests disagree, you have found the most
important comment before reading a single line of logic.

## Say What Kind of Comment It Is

A review thread where every remark looks equally blocking is exhausting.
Prefix the optional ones:

```text
nit: rename `tmp2` - not blocking
question: is this reachable when the cache is cold?
blocking: this unwrap can panic on empty input
```

The author learns more from three labeled comments than from fifteen
ambiguous ones.

## When to Stop Typing

Three rounds of back-and-forth on one thread means the medium has
failed. Get on a call, agree, and write the conclusion back into the
thread for the archaeologists.

## What Not to Review

Formatting, import order, obvious lint findings - machines do this now.
Every style comment a human writes is a signal the repo is missing a
formatter config, and a small tax on goodwill that the real comments
need.

## The Exit Question

Before approving, ask one question: "what breaks first if this is
wrong?" If you cannot answer it, you skimmed. Read the failure path
once more; that is where review earns its hour.
"#,
        },
        Post {
            title: "Why I Keep a Decision Log",
            excerpt: "Six months from now you will not remember why the queue is \
                      bounded at 1024. One markdown file fixes that.",
            author: "Sam Okafor",
            date: date(2023, 11, 21),
            tags: &["practices", "writing"],
            body: r#"# Why I Keep a Decision Log

Every project accumulates choices that made perfect sense at the time:
a bounded queue here, a denormalized table there, a retry cap of three.
The code remembers the what; nothing remembers the why.

## The Format

One file, `decisions.md`, append-only. Each entry is four lines:

- **Date** and a short title
- **Context** - the constraint that forced a choice
- **Decision** - what we picked
- **Revisit when** - the condition that would invalidate it

## What It Buys You

The log answers the two questions that otherwise burn an afternoon of
archaeology: "is this load-bearing?" and "can I change it now?". When
the *revisit when* condition arrives, the entry is a ready-made ticket.

It costs five minutes per decision. It pays for itself the first time
someone does not re-litigate a settled argument in a meeting.
"#,
        },
    ]
}
