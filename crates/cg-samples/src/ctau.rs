//! The CTau signal-sample set.
//!
//! SIDM XX → 2A → 4μ signal points, one per A′ lifetime. Returned as an
//! owned registry so each caller gets its own instance; there is no
//! module-level singleton.

use cg_core::Result;

use crate::record::SampleRecord;
use crate::registry::SampleRegistry;

/// Build the registry of the four CTau signal samples.
pub fn ctau_samples() -> Result<SampleRegistry> {
    let mut registry = SampleRegistry::new();

    registry.register(
        "CTau9p6",
        SampleRecord::new(
            "/SIDM_XXTo2ATo4Mu_mXX-500_mA-1p2_ctau-9p6_TuneCP5_13TeV-madgraph-pythia8/RunIIAutumn18MiniAOD-102X_upgrade2018_realistic_v15-v1/MINIAODSIM",
            &["isMC=True", "useWeights=True", "xsec=0.01057", "addEventInfo=True"],
            "EventAwareLumiBased",
            10000,
        ),
    )?;

    registry.register(
        "CTau1p9",
        SampleRecord::new(
            "/SIDM_XXTo2ATo4Mu_mXX-500_mA-1p2_ctau-1p9_TuneCP5_13TeV-madgraph-pythia8/RunIIAutumn18MiniAOD-102X_upgrade2018_realistic_v15-v1/MINIAODSIM",
            &["isMC=True", "useWeights=True", "xsec=0.0008230", "addEventInfo=True"],
            "EventAwareLumiBased",
            10000,
        ),
    )?;

    registry.register(
        "CTau2",
        SampleRecord::new(
            "/SIDM_XXTo2ATo4Mu_mXX-500_mA-0p25_ctau-2_TuneCP5_13TeV-madgraph-pythia8/RunIIAutumn18MiniAOD-102X_upgrade2018_realistic_v15-v1/MINIAODSIM",
            &["isMC=True", "useWeights=True", "xsec=0.0001852", "addEventInfo=True"],
            "EventAwareLumiBased",
            10000,
        ),
    )?;

    registry.register(
        "CTau1",
        SampleRecord::new(
            "/SIDM_XXTo2ATo4Mu_mXX-200_mA-0p25_ctau-1_TuneCP5_13TeV-madgraph-pythia8/RunIIAutumn18MiniAOD-102X_upgrade2018_realistic_v15-v1/MINIAODSIM",
            &["isMC=True", "useWeights=True", "xsec=0.0001160", "addEventInfo=True"],
            "EventAwareLumiBased",
            10000,
        ),
    )?;

    Ok(registry)
}
