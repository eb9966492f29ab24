mod helpers;

use std::collections::HashMap;

use helpers::{memory_capsule, seed, sqlite_capsule};

#[tokio::test]
async fn draw_on_empty_collection_returns_none() {
    let capsule = sqlite_capsule();
    assert!(capsule.draw_any().await.unwrap().is_none());
}

#[tokio::test]
async fn draw_with_unmatched_filter_returns_none() {
    let capsule = sqlite_capsule();
    seed(&capsule, &[("one", "Quote"), ("two", "Note")]).await;

    let drawn = capsule.draw_random(Some(&["Link"])).await.unwrap();
    assert!(drawn.is_none());
}

#[tokio::test]
async fn draw_single_record_always_returns_it() {
    let capsule = sqlite_capsule();
    let ids = seed(&capsule, &[("only one", "Quote")]).await;

    for _ in 0..10 {
        let drawn = capsule.draw_any().await.unwrap().unwrap();
        assert_eq!(drawn.id, ids[0]);
    }
}

#[tokio::test]
async fn filtered_draw_never_leaves_the_filter() {
    let capsule = sqlite_capsule();
    seed(
        &capsule,
        &[
            ("a", "Quote"),
            ("b", "Task"),
            ("c", "Note"),
            ("d", "Task"),
            ("e", "Link"),
            ("f", "Quote"),
        ],
    )
    .await;

    for _ in 0..100 {
        let drawn = capsule.draw_random(Some(&["Task"])).await.unwrap().unwrap();
        assert_eq!(drawn.category, "Task");
    }

    for _ in 0..100 {
        let drawn = capsule
            .draw_random(Some(&["Quote", "Link"]))
            .await
            .unwrap()
            .unwrap();
        assert!(drawn.category == "Quote" || drawn.category == "Link");
    }
}

#[tokio::test]
async fn filtered_draw_reaches_every_member() {
    let capsule = sqlite_capsule();
    let ids = seed(
        &capsule,
        &[("a", "Task"), ("b", "Note"), ("c", "Task"), ("d", "Task")],
    )
    .await;

    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        let drawn = capsule.draw_random(Some(&["Task"])).await.unwrap().unwrap();
        seen.insert(drawn.id);
    }
    assert_eq!(seen.len(), 3);
    assert!(!seen.contains(&ids[1]));
}

#[tokio::test]
async fn empty_filter_is_unfiltered() {
    let capsule = memory_capsule();
    seed(&capsule, &[("a", "Quote"), ("b", "Task")]).await;

    let empty: &[&str] = &[];
    let mut categories = std::collections::HashSet::new();
    for _ in 0..100 {
        let drawn = capsule.draw_random(Some(empty)).await.unwrap().unwrap();
        categories.insert(drawn.category);
    }
    assert_eq!(categories.len(), 2);

    assert_eq!(
        capsule.count(Some(empty)).await.unwrap(),
        capsule.count(None::<&[&str]>).await.unwrap()
    );
}

#[tokio::test]
async fn draw_is_close_to_uniform() {
    let capsule = memory_capsule();
    let ids = seed(
        &capsule,
        &[("w", "Quote"), ("x", "Quote"), ("y", "Note"), ("z", "Task")],
    )
    .await;

    let draws = 8000;
    let mut hits: HashMap<String, usize> = HashMap::new();
    for _ in 0..draws {
        let drawn = capsule.draw_any().await.unwrap().unwrap();
        *hits.entry(drawn.id).or_default() += 1;
    }

    for id in &ids {
        let freq = hits.get(id).copied().unwrap_or(0) as f64 / draws as f64;
        assert!(
            (freq - 0.25).abs() < 0.05,
            "record {id} drawn with frequency {freq}"
        );
    }
}

#[tokio::test]
async fn filtered_draw_is_close_to_uniform_over_members() {
    let capsule = memory_capsule();
    let ids = seed(
        &capsule,
        &[("a", "Task"), ("b", "Note"), ("c", "Task"), ("d", "Note"), ("e", "Task")],
    )
    .await;

    let draws = 6000;
    let mut hits: HashMap<String, usize> = HashMap::new();
    for _ in 0..draws {
        let drawn = capsule.draw_random(Some(&["Task"])).await.unwrap().unwrap();
        *hits.entry(drawn.id).or_default() += 1;
    }

    for id in [&ids[0], &ids[2], &ids[4]] {
        let freq = hits.get(id).copied().unwrap_or(0) as f64 / draws as f64;
        assert!((freq - 1.0 / 3.0).abs() < 0.05, "record {id} drawn with frequency {freq}");
    }
}

#[tokio::test]
async fn sqlite_draw_is_close_to_uniform() {
    let capsule = sqlite_capsule();
    let ids = seed(
        &capsule,
        &[("w", "Quote"), ("x", "Quote"), ("y", "Note"), ("z", "Task")],
    )
    .await;

    let draws = 4000;
    let mut hits: HashMap<String, usize> = HashMap::new();
    for _ in 0..draws {
        let drawn = capsule.draw_any().await.unwrap().unwrap();
        *hits.entry(drawn.id).or_default() += 1;
    }

    for id in &ids {
        let freq = hits.get(id).copied().unwrap_or(0) as f64 / draws as f64;
        assert!(
            (freq - 0.25).abs() < 0.05,
            "record {id} drawn with frequency {freq}"
        );
    }
}

#[tokio::test]
async fn sqlite_filtered_draw_is_close_to_uniform_over_members() {
    let capsule = sqlite_capsule();
    let ids = seed(
        &capsule,
        &[("a", "Task"), ("b", "Note"), ("c", "Task"), ("d", "Note"), ("e", "Task")],
    )
    .await;

    let draws = 3000;
    let mut hits: HashMap<String, usize> = HashMap::new();
    for _ in 0..draws {
        let drawn = capsule.draw_random(Some(&["Task"])).await.unwrap().unwrap();
        assert_eq!(drawn.category, "Task");
        *hits.entry(drawn.id).or_default() += 1;
    }

    for id in [&ids[0], &ids[2], &ids[4]] {
        let freq = hits.get(id).copied().unwrap_or(0) as f64 / draws as f64;
        assert!((freq - 1.0 / 3.0).abs() < 0.05, "record {id} drawn with frequency {freq}");
    }
}

#[tokio::test]
async fn blank_only_filter_matches_nothing() {
    let capsule = sqlite_capsule();
    seed(&capsule, &[("kept", "Quote")]).await;

    assert!(capsule.draw_random(Some(&["  "])).await.unwrap().is_none());
    assert!(capsule.draw_random(Some(&["", " "])).await.unwrap().is_none());
    assert_eq!(capsule.count(Some(&[""])).await.unwrap(), 0);

    let memory = memory_capsule();
    seed(&memory, &[("kept", "Quote")]).await;
    assert!(memory.draw_random(Some(&["  "])).await.unwrap().is_none());
    assert_eq!(memory.count(Some(&[""])).await.unwrap(), 0);
}

#[tokio::test]
async fn draw_sees_records_inserted_after_previous_draw() {
    let capsule = sqlite_capsule();
    seed(&capsule, &[("first", "Quote")]).await;
    assert!(capsule.draw_random(Some(&["Note"])).await.unwrap().is_none());

    seed(&capsule, &[("second", "Note")]).await;
    let drawn = capsule.draw_random(Some(&["Note"])).await.unwrap().unwrap();
    assert_eq!(drawn.content, "second");
}
