use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use uplift_gen::error::Result;
use uplift_gen::generator::Config;
use uplift_gen::generator::FLOW_UPLIFT;
use uplift_gen::generator::REVENUE_UPLIFT;
use uplift_gen::Generator;
use uplift_gen::ScenarioParameters;

const EPS: f64 = 1e-9;

fn generator() -> Result<Generator> {
    Generator::try_new(Config::default())
}

#[test]
fn test_ninety_consecutive_days() -> Result<()> {
    let gen = generator()?;
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    for (flows, revenue) in [(1, 100), (300, 500), (500, 1000), (17, 330)] {
        let series = gen.generate(&ScenarioParameters::new(flows, revenue), &mut rng)?;
        assert_eq!(series.len(), 90);
        for (idx, s) in series.samples().iter().enumerate() {
            assert_eq!(s.day, idx + 1);
        }
    }

    Ok(())
}

#[test]
fn test_revenue_follows_flows() -> Result<()> {
    let gen = generator()?;
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let params = ScenarioParameters::new(300, 500);
    let series = gen.generate(&params, &mut rng)?;

    for s in series.samples() {
        assert!(s.revenue_baseline.is_finite());
        assert!(s.revenue_uplifted.is_finite());
        let expected = s.flows_baseline / 300. * 500.;
        assert!((s.revenue_baseline - expected).abs() < EPS);
    }

    // day 1 sits near the bottom of the ramp: 300 * (0.5 + growth(1)) plus noise
    let day1 = series.samples()[0];
    let trend = 300. * (0.5 + gen.growth(1));
    assert!((day1.flows_baseline - trend).abs() < 5. * 6.);
    assert!((day1.revenue_baseline - 500. * day1.flows_baseline / 300.).abs() < EPS);

    Ok(())
}

#[test]
fn test_daily_uplift_factors_in_range() -> Result<()> {
    let gen = generator()?;
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    for _ in 0..20 {
        let series = gen.generate(&ScenarioParameters::new(250, 600), &mut rng)?;
        for s in series.samples() {
            let flow_factor = s.flows_uplifted / s.flows_baseline;
            let revenue_factor = s.revenue_uplifted / s.revenue_baseline;
            assert!(flow_factor >= FLOW_UPLIFT.min - EPS && flow_factor <= FLOW_UPLIFT.max + EPS);
            assert!(
                revenue_factor >= REVENUE_UPLIFT.min - EPS
                    && revenue_factor <= REVENUE_UPLIFT.max + EPS
            );
        }
    }

    Ok(())
}

#[test]
fn test_uplift_factors_cover_range() -> Result<()> {
    let gen = generator()?;
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let params = ScenarioParameters::new(300, 500);

    let mut flow = (f64::MAX, f64::MIN);
    let mut revenue = (f64::MAX, f64::MIN);
    let mut draws = 0;
    while draws < 10_000 {
        for s in gen.generate(&params, &mut rng)?.samples() {
            let f = s.flows_uplifted / s.flows_baseline;
            let r = s.revenue_uplifted / s.revenue_baseline;
            flow = (flow.0.min(f), flow.1.max(f));
            revenue = (revenue.0.min(r), revenue.1.max(r));
            draws += 1;
        }
    }

    for (range, (min, max)) in [(FLOW_UPLIFT, flow), (REVENUE_UPLIFT, revenue)] {
        let tolerance = (range.max - range.min) * 0.01;
        assert!(min >= range.min - EPS && max <= range.max + EPS);
        assert!(min - range.min < tolerance, "min {min}");
        assert!(range.max - max < tolerance, "max {max}");
    }

    Ok(())
}

#[test]
fn test_totals_are_truncated_sums() -> Result<()> {
    let gen = generator()?;
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let series = gen.generate(&ScenarioParameters::default(), &mut rng)?;
    let totals = series.totals();

    let sum = |f: fn(&uplift_gen::DailySample) -> f64| series.samples().iter().map(f).sum::<f64>();
    assert_eq!(totals.total_flows_baseline, sum(|s| s.flows_baseline).trunc() as i64);
    assert_eq!(totals.total_flows_uplifted, sum(|s| s.flows_uplifted).trunc() as i64);
    assert_eq!(totals.total_revenue_baseline, sum(|s| s.revenue_baseline).trunc() as i64);
    assert_eq!(totals.total_revenue_uplifted, sum(|s| s.revenue_uplifted).trunc() as i64);
    assert_eq!(
        totals.additional_flows,
        totals.total_flows_uplifted - totals.total_flows_baseline
    );
    assert_eq!(
        totals.additional_revenue,
        totals.total_revenue_uplifted - totals.total_revenue_baseline
    );

    Ok(())
}

#[test]
fn test_revenue_uplift_share() -> Result<()> {
    let gen = generator()?;
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..50 {
        let totals = gen
            .generate(&ScenarioParameters::new(300, 500), &mut rng)?
            .totals();
        assert!(totals.additional_revenue > 0);
        assert!(totals.additional_flows > 0);
        let share = totals.additional_revenue as f64 / totals.total_revenue_baseline as f64;
        assert!(share > 0.17 && share < 0.27, "share {share}");
    }

    Ok(())
}

#[test]
fn test_seeded_runs_repeat() -> Result<()> {
    let gen = generator()?;
    let params = ScenarioParameters::default();

    let a = gen.generate(&params, &mut ChaCha8Rng::seed_from_u64(9))?;
    let b = gen.generate(&params, &mut ChaCha8Rng::seed_from_u64(9))?;
    let c = gen.generate(&params, &mut ChaCha8Rng::seed_from_u64(10))?;

    assert_eq!(a, b);
    assert_ne!(a, c);

    Ok(())
}

#[test]
fn test_custom_horizon() -> Result<()> {
    let gen = Generator::try_new(Config {
        days: 30,
        ..Default::default()
    })?;
    let series = gen.generate(
        &ScenarioParameters::default(),
        &mut ChaCha8Rng::seed_from_u64(0),
    )?;
    assert_eq!(series.len(), 30);
    assert_eq!(series.samples().last().map(|s| s.day), Some(30));

    Ok(())
}
