//! The static NanoAOD quantity table.
//!
//! One `pub const` per mnemonic for compile-time binding, plus the
//! [`MNEMONICS`] slice that preserves the original mnemonic spelling and
//! declaration order for runtime lookup.
//!
//! Several mnemonics deliberately point at a differently-named branch
//! (`RHO` → `Pileup_pudensity`, the `MET`/`PFMET` Puppi swap, the
//! `GenParticle_*` → `GenPart_*` family). These mismatches are carried over
//! verbatim from the upstream listing and are pinned by regression tests.

use crate::quantity::Quantity;

macro_rules! quantities {
    ($($(#[$meta:meta])* $konst:ident: $mnemonic:literal => $column:literal;)+) => {
        $(
            $(#[$meta])*
            #[doc = concat!("Mnemonic `", $mnemonic, "` for NanoAOD column `", $column, "`.")]
            pub const $konst: Quantity = Quantity::from_static($column);
        )+

        /// Every declared (mnemonic, quantity) pair, in declaration order.
        ///
        /// Duplicate column names across mnemonics are permitted; the table
        /// does not enforce uniqueness.
        pub static MNEMONICS: &[(&str, Quantity)] = &[
            $(($mnemonic, $konst),)+
        ];
    };
}

quantities! {
    // ── Event identification ───────────────────────────────────
    /// Run number.
    RUN: "run" => "run";
    /// Luminosity block within the run.
    LUMINOSITY_BLOCK: "luminosityBlock" => "luminosityBlock";
    /// Event number.
    EVENT: "event" => "event";
    LHE_NJETS: "LHE_Njets" => "LHE_Njets";
    PREFIRE_WEIGHT: "prefireWeight" => "L1PreFiringWeight_Nom";

    // ── Taus ───────────────────────────────────────────────────
    TAU_PT: "Tau_pt" => "Tau_pt";
    TAU_ETA: "Tau_eta" => "Tau_eta";
    TAU_PHI: "Tau_phi" => "Tau_phi";
    TAU_MASS: "Tau_mass" => "Tau_mass";
    TAU_DZ: "Tau_dz" => "Tau_dz";
    TAU_DXY: "Tau_dxy" => "Tau_dxy";
    TAU_CHARGE: "Tau_charge" => "Tau_charge";
    TAU_DECAY_MODE: "Tau_decayMode" => "Tau_decayMode";
    TAU_GEN_MATCH: "Tau_genMatch" => "Tau_genPartFlav";
    /// Raw DeepTau 2017v2p1 vs-jet discriminator score.
    TAU_ID_RAW: "Tau_IDraw" => "Tau_rawDeepTau2017v2p1VSjet";
    TAU_INDEX_TO_GEN: "Tau_indexToGen" => "Tau_genPartIdx";
    TAU_ASSOCIATED_JET: "Tau_associatedJet" => "Tau_jetIdx";
    TAU_ID_VS_JET: "Tau_ID_vsJet" => "Tau_idDeepTau2017v2p1VSjet";
    TAU_ID_VS_ELE: "Tau_ID_vsEle" => "Tau_idDeepTau2017v2p1VSe";
    TAU_ID_VS_MU: "Tau_ID_vsMu" => "Tau_idDeepTau2017v2p1VSmu";

    // ── Muons ──────────────────────────────────────────────────
    MUON_PT: "Muon_pt" => "Muon_pt";
    MUON_ETA: "Muon_eta" => "Muon_eta";
    MUON_PHI: "Muon_phi" => "Muon_phi";
    MUON_MASS: "Muon_mass" => "Muon_mass";
    MUON_DZ: "Muon_dz" => "Muon_dz";
    MUON_DXY: "Muon_dxy" => "Muon_dxy";
    MUON_CHARGE: "Muon_charge" => "Muon_charge";
    MUON_GEN_MATCH: "Muon_genMatch" => "Muon_genPartFlav";
    MUON_INDEX_TO_GEN: "Muon_indexToGen" => "Muon_genPartIdx";
    MUON_SIP3D: "Muon_sip3d" => "Muon_sip3d";
    MUON_PF_REL_ISO04_ALL: "Muon_pfRelIso04_all" => "Muon_pfRelIso04_all";
    MUON_MVA_TTH: "Muon_mvaTTH" => "Muon_mvaTTH";

    // ── Electrons ──────────────────────────────────────────────
    ELECTRON_PT: "Electron_pt" => "Electron_pt";
    ELECTRON_ETA: "Electron_eta" => "Electron_eta";
    ELECTRON_DXY: "Electron_dxy" => "Electron_dxy";
    ELECTRON_DZ: "Electron_dz" => "Electron_dz";
    ELECTRON_PHI: "Electron_phi" => "Electron_phi";
    ELECTRON_MASS: "Electron_mass" => "Electron_mass";
    ELECTRON_ISO: "Electron_iso" => "Electron_pfRelIso03_all";
    ELECTRON_CHARGE: "Electron_charge" => "Electron_charge";
    ELECTRON_INDEX_TO_GEN: "Electron_indexToGen" => "Electron_genPartIdx";
    ELECTRON_SIP3D: "Electron_sip3d" => "Electron_sip3d";
    ELECTRON_MVA_FALL17_V2_NO_ISO_WP90: "Electron_mvaFall17V2noIso_WP90" => "Electron_mvaFall17V2noIso_WP90";
    ELECTRON_CONV_VETO: "Electron_convVeto" => "Electron_convVeto";
    ELECTRON_LOST_HITS: "Electron_lostHits" => "Electron_lostHits";
    ELECTRON_MVA_TTH: "Electron_mvaTTH" => "Electron_mvaTTH";
    ELECTRON_PDG_ID: "Electron_pdgId" => "Electron_pdgId";
    MUON_PDG_ID: "Muon_pdgId" => "Muon_pdgId";

    // ── Generator-level jets ───────────────────────────────────
    GEN_JET_PT: "GenJet_pt" => "GenJet_pt";
    GEN_JET_ETA: "GenJet_eta" => "GenJet_eta";
    GEN_JET_PHI: "GenJet_phi" => "GenJet_phi";

    // ── Jets ───────────────────────────────────────────────────
    JET_ETA: "Jet_eta" => "Jet_eta";
    JET_PHI: "Jet_phi" => "Jet_phi";
    JET_PT: "Jet_pt" => "Jet_pt";
    JET_MASS: "Jet_mass" => "Jet_mass";
    JET_AREA: "Jet_area" => "Jet_area";
    JET_FLAVOR: "Jet_flavor" => "Jet_hadronFlavour";
    JET_RAW_FACTOR: "Jet_rawFactor" => "Jet_rawFactor";
    JET_ID: "Jet_ID" => "Jet_jetId";
    JET_PUID: "Jet_PUID" => "Jet_puId";
    JET_ASSOCIATED_GEN_JET: "Jet_associatedGenJet" => "Jet_genJetIdx";
    /// DeepCSV score; the DeepFlavour branch `Jet_btagDeepFlavB` is not wired up.
    BJET_DISCRIMINATOR: "BJet_discriminator" => "Jet_btagDeepB";

    // ── Pileup ─────────────────────────────────────────────────
    PILEUP_N_TRUE_INT: "Pileup_nTrueInt" => "Pileup_nTrueInt";
    RHO: "rho" => "Pileup_pudensity";

    // ── Generator-level particles ──────────────────────────────
    GEN_PARTICLE_ETA: "GenParticle_eta" => "GenPart_eta";
    GEN_PARTICLE_PHI: "GenParticle_phi" => "GenPart_phi";
    GEN_PARTICLE_PT: "GenParticle_pt" => "GenPart_pt";
    GEN_PARTICLE_MASS: "GenParticle_mass" => "GenPart_mass";
    GEN_PARTICLE_PDG_ID: "GenParticle_pdgId" => "GenPart_pdgId";
    GEN_PARTICLE_STATUS: "GenParticle_status" => "GenPart_status";
    GEN_PARTICLE_STATUS_FLAGS: "GenParticle_statusFlags" => "GenPart_statusFlags";
    GEN_PARTICLE_MOTHER_ID: "GenParticle_motherid" => "GenPart_genPartIdxMother";

    // ── Trigger objects ────────────────────────────────────────
    TRIGGER_OBJECT_BIT: "TriggerObject_bit" => "TrigObj_filterBits";
    TRIGGER_OBJECT_PT: "TriggerObject_pt" => "TrigObj_pt";
    TRIGGER_OBJECT_ETA: "TriggerObject_eta" => "TrigObj_eta";
    TRIGGER_OBJECT_PHI: "TriggerObject_phi" => "TrigObj_phi";
    TRIGGER_OBJECT_ID: "TriggerObject_id" => "TrigObj_id";

    // ── HTXS (Higgs template cross sections) ───────────────────
    HTXS_HIGGS_PT: "HTXS_Higgs_pt" => "HTXS_Higgs_pt";
    HTXS_HIGGS_Y: "HTXS_Higgs_y" => "HTXS_Higgs_y";
    HTXS_NJETS30: "HTXS_njets30" => "HTXS_njets30";
    HTXS_STAGE_0: "HTXS_stage_0" => "HTXS_stage_0";
    HTXS_STAGE_1_PTJET30: "HTXS_stage_1_pTjet30" => "HTXS_stage_1_pTjet30";
    HTXS_STAGE1_1_FINE_CAT_PTJET30GEV: "HTXS_stage1_1_fine_cat_pTjet30GeV" => "HTXS_stage1_1_fine_cat_pTjet30GeV";
    HTXS_STAGE1_2_CAT_PTJET30GEV: "HTXS_stage1_2_cat_pTjet30GeV" => "HTXS_stage1_2_cat_pTjet30GeV";
    HTXS_STAGE1_2_FINE_CAT_PTJET30GEV: "HTXS_stage1_2_fine_cat_pTjet30GeV" => "HTXS_stage1_2_fine_cat_pTjet30GeV";

    // ── MET ────────────────────────────────────────────────────
    // TODO: move covariance and significance to the Puppi branches once
    // NanoAOD provides them.
    MET_COV_XX: "MET_covXX" => "MET_covXX";
    MET_COV_XY: "MET_covXY" => "MET_covXY";
    MET_COV_YY: "MET_covYY" => "MET_covYY";
    MET_SIGNIFICANCE: "MET_significance" => "MET_significance";

    /// Puppi MET; the plain PF branches are reachable via `PFMET_*`.
    MET_PHI: "MET_phi" => "PuppiMET_phi";
    MET_PT: "MET_pt" => "PuppiMET_pt";
    MET_SUM_ET: "MET_sumEt" => "PuppiMET_sumEt";

    PFMET_PHI: "PFMET_phi" => "MET_phi";
    PFMET_PT: "PFMET_pt" => "MET_pt";
    PFMET_SUM_ET: "PFMET_sumEt" => "MET_sumEt";

    // ── Tau embedding ──────────────────────────────────────────
    GEN_WEIGHT: "genWeight" => "genWeight";
    TAU_EMBEDDING_INITIAL_MET_ET: "TauEmbedding_initialMETEt" => "TauEmbedding_initialMETEt";
    TAU_EMBEDDING_INITIAL_MET_PHI: "TauEmbedding_initialMETphi" => "TauEmbedding_initialMETphi";
    TAU_EMBEDDING_INITIAL_PUPPI_MET_ET: "TauEmbedding_initialPuppiMETEt" => "TauEmbedding_initialPuppiMETEt";
    TAU_EMBEDDING_INITIAL_PUPPI_MET_PHI: "TauEmbedding_initialPuppiMETphi" => "TauEmbedding_initialPuppiMETphi";
    TAU_EMBEDDING_IS_MEDIUM_LEADING_MUON: "TauEmbedding_isMediumLeadingMuon" => "TauEmbedding_isMediumLeadingMuon";
    TAU_EMBEDDING_IS_MEDIUM_TRAILING_MUON: "TauEmbedding_isMediumTrailingMuon" => "TauEmbedding_isMediumTrailingMuon";
    TAU_EMBEDDING_IS_TIGHT_LEADING_MUON: "TauEmbedding_isTightLeadingMuon" => "TauEmbedding_isTightLeadingMuon";
    TAU_EMBEDDING_IS_TIGHT_TRAILING_MUON: "TauEmbedding_isTightTrailingMuon" => "TauEmbedding_isTightTrailingMuon";
    TAU_EMBEDDING_INITIAL_PAIR_CANDIDATES: "TauEmbedding_InitialPairCandidates" => "TauEmbedding_nInitialPairCandidates";
    TAU_EMBEDDING_SELECTION_OLD_MASS: "TauEmbedding_SelectionOldMass" => "TauEmbedding_SelectionOldMass";
    TAU_EMBEDDING_SELECTION_NEW_MASS: "TauEmbedding_SelectionNewMass" => "TauEmbedding_SelectionNewMass";
}
