// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A five-tab bottom bar driven by simulated clicks.
//!
//! This example shows how to:
//! - back [`Elements`] with a plain map of element state,
//! - group selectors under one coordinator and hand the selection around,
//! - lock a tab and see clicks on it ignored,
//! - read transition events after each simulated frame burst.
//!
//! Run:
//! - `cargo run -p understory_demos --example tab_bar_walkthrough`
//! - `RUST_LOG=understory_tab_bar=debug cargo run -p understory_demos --example tab_bar_walkthrough`

use std::collections::HashMap;

use kurbo::Point;
use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_tab_bar::{
    Channel, CoordinatorConfig, Elements, IconId, SelectorConfig, SelectorId, SelectorParts,
    TabBar, TabBarEvent, Target,
};
use understory_tween::PropertyStore;

const FRAME: f64 = 1.0 / 60.0;
const TABS: [&str; 5] = ["home", "shop", "play", "team", "profile"];

#[derive(Debug, Default)]
struct Scene {
    values: HashMap<Target<u32>, f64>,
    pivots: HashMap<u32, Point>,
    icons: HashMap<u32, IconId>,
    interactable: HashMap<u32, bool>,
}

impl PropertyStore<Target<u32>> for Scene {
    fn get(&self, target: Target<u32>) -> f64 {
        let rest = if target.channel.is_scale() { 1.0 } else { 0.0 };
        self.values.get(&target).copied().unwrap_or(rest)
    }

    fn set(&mut self, target: Target<u32>, value: f64) {
        self.values.insert(target, value);
    }
}

impl Elements<u32> for Scene {
    fn set_pivot(&mut self, element: u32, pivot: Point) {
        self.pivots.insert(element, pivot);
    }

    fn icon(&self, element: u32) -> Option<IconId> {
        self.icons.get(&element).copied()
    }

    fn set_icon(&mut self, element: u32, icon: IconId) {
        self.icons.insert(element, icon);
    }

    fn set_interactable(&mut self, element: u32, interactable: bool) {
        self.interactable.insert(element, interactable);
    }
}

fn parts(index: u32) -> SelectorParts<u32> {
    let base = index * 10;
    SelectorParts {
        root: base,
        icon: base + 1,
        label: base + 2,
        background: base + 3,
        highlight: Some(base + 4),
    }
}

/// Run half a second of frames and print what happened.
fn run(bar: &mut TabBar<u32, Scene>, tabs: &[SelectorId]) {
    for _ in 0..30 {
        bar.tick(FRAME);
    }
    for event in bar.drain_events() {
        match event {
            TabBarEvent::ContentActivated(id) => {
                let name = tabs
                    .iter()
                    .position(|t| *t == id)
                    .map_or("?", |i| TABS[i]);
                println!("  event: {name} opened");
            }
            TabBarEvent::AllContentClosed(group) => {
                println!("  event: all content closed ({group:?})");
            }
        }
    }
    let widths: Vec<String> = (0_u32..)
        .zip(TABS)
        .map(|(i, name)| {
            let w = bar
                .elements()
                .get(Target::new(parts(i).root, Channel::FlexibleWidth));
            format!("{name}={w:.2}")
        })
        .collect();
    println!("  widths: {}", widths.join(" "));
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut scene = Scene::default();
    for (i, _) in (0_u32..).zip(TABS) {
        let icon = parts(i).icon;
        scene.icons.insert(icon, IconId(100 + u64::from(i)));
        scene.values.insert(Target::new(icon, Channel::PositionY), 8.0);
    }

    let mut bar = TabBar::new(scene);
    let group = bar.add_coordinator(CoordinatorConfig {
        allow_no_active: true,
        ..CoordinatorConfig::default()
    });
    let tabs: Vec<SelectorId> = (0_u32..)
        .zip(TABS)
        .map(|(i, _)| {
            let config = SelectorConfig {
                locked_icon: Some(IconId(999)),
                ..SelectorConfig::default()
            };
            bar.add_selector(parts(i), config, Some(group))
                .expect("coordinator was just added")
        })
        .collect();
    bar.initialize();
    info!(tabs = tabs.len(), "bar initialized");
    run(&mut bar, &tabs);

    for (label, index) in [("home", 0), ("team", 3), ("shop", 1), ("shop", 1)] {
        let outcome = bar.click(tabs[index]);
        println!("click {label}: {outcome:?}");
        run(&mut bar, &tabs);
    }

    bar.set_locked(tabs[4], true).expect("tab exists");
    println!("click profile (locked): {:?}", bar.click(tabs[4]));
    println!(
        "profile icon while locked: {:?}",
        bar.elements().icon(parts(4).icon)
    );
    println!(
        "profile accepts input: {:?}",
        bar.elements().interactable.get(&parts(4).root)
    );
    println!(
        "select profile programmatically: {:?}",
        bar.set_active(group, tabs[4])
    );

    println!("click play: {:?}", bar.click(tabs[2]));
    println!(
        "play highlight pivot: {:?}",
        parts(2)
            .highlight
            .and_then(|h| bar.elements().pivots.get(&h))
    );
    bar.tick(FRAME);
    println!("close everything mid-transition");
    bar.deactivate_all(group).expect("coordinator exists");
    run(&mut bar, &tabs);

    bar.teardown();
    info!("bar torn down");
}
