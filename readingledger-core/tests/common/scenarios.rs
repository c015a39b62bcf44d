//! Named ingestion scenarios with their expected aggregates

/// One scenario: batches posted in order, then the expected query results
pub struct Scenario {
    pub name: &'static str,
    pub batches: &'static [&'static [(u64, &'static str)]],
    pub expected_sum: u128,
    pub expected_latest: &'static str,
}

pub const SINGLE_READING: Scenario = Scenario {
    name: "single_reading",
    batches: &[&[(5, "2024-02-02T08:03:29-0600")]],
    expected_sum: 5,
    expected_latest: "2024-02-02T08:03:29-0600",
};

pub const TWO_READINGS_OUT_OF_ORDER: Scenario = Scenario {
    name: "two_readings_out_of_order",
    batches: &[&[(5, "2024-02-02T08:03:29-0600"), (4, "2022-12-23T09:18:01-0600")]],
    expected_sum: 9,
    expected_latest: "2024-02-02T08:03:29-0600",
};

pub const REPLAYED_TIMESTAMP: Scenario = Scenario {
    name: "replayed_timestamp",
    batches: &[
        &[(5, "2024-02-02T08:03:29-0600")],
        &[(53, "2024-02-02T08:03:29-0600")],
    ],
    expected_sum: 5,
    expected_latest: "2024-02-02T08:03:29-0600",
};

pub const APPENDED_BATCHES: Scenario = Scenario {
    name: "appended_batches",
    batches: &[
        &[(4, "2024-02-02T08:03:29-0600")],
        &[(3, "2024-01-01T08:03:29-0600"), (2, "2020-03-03T09:45:00-0600")],
    ],
    expected_sum: 9,
    expected_latest: "2024-02-02T08:03:29-0600",
};

pub const LATER_TIME_ADDED: Scenario = Scenario {
    name: "later_time_added",
    batches: &[
        &[(9, "2024-02-02T11:03:29-0600")],
        &[(3, "2024-02-02T11:33:03-0600")],
    ],
    expected_sum: 12,
    expected_latest: "2024-02-02T11:33:03-0600",
};

pub const EARLIER_TIME_ADDED: Scenario = Scenario {
    name: "earlier_time_added",
    batches: &[
        &[(9, "2024-02-02T11:03:29-0600")],
        &[(3, "2024-02-02T11:01:03-0600")],
    ],
    expected_sum: 12,
    expected_latest: "2024-02-02T11:03:29-0600",
};

pub const SAME_INSTANT_OTHER_OFFSET: Scenario = Scenario {
    name: "same_instant_other_offset",
    batches: &[
        &[(5, "2024-02-02T08:03:29-0600")],
        &[(8, "2024-02-02T14:03:29+0000"), (1, "2024-02-02T15:03:29+0000")],
    ],
    expected_sum: 6,
    expected_latest: "2024-02-02T15:03:29+0000",
};

pub const ALL: &[Scenario] = &[
    SINGLE_READING,
    TWO_READINGS_OUT_OF_ORDER,
    REPLAYED_TIMESTAMP,
    APPENDED_BATCHES,
    LATER_TIME_ADDED,
    EARLIER_TIME_ADDED,
    SAME_INSTANT_OTHER_OFFSET,
];
