//! # Equation Registry
//!
//! Central registry of every formula used by the gamma-method pipeline.
//! Each equation carries its code reference, formula, variables and the
//! function implementing it, so a report can list exactly what was applied.
//!
//! ## Usage
//!
//! ```rust
//! use tcc_core::equations::registry::Equation;
//!
//! let meta = Equation::GammaFactor.metadata();
//! println!("{}: {}", meta.name, meta.formula_plain);
//! assert!(meta.reference.citation().contains("Annex B"));
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to a structural engineering code or standard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CodeReference {
    /// EN 1995-1-1 (Eurocode 5) clause or equation
    Eurocode5 { clause: &'static str },
    /// Roark's Formulas for Stress and Strain
    Roarks {
        edition: u8,
        table: &'static str,
        case: &'static str,
    },
    /// Fundamental mechanics (no specific code reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Eurocode5 { clause } => format!("EN 1995-1-1:2004 {}", clause),
            CodeReference::Roarks { edition, table, case } => {
                format!("Roark's {}ed, {}, Case {}", edition, table, case)
            }
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::Eurocode5 { .. } => "EC5",
            CodeReference::Roarks { .. } => "Roark's",
            CodeReference::Mechanics => "Mechanics",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for grouping equations, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Areas and second moments of area
    SectionProperties,
    /// Connection efficiency factor γ
    ConnectionEfficiency,
    /// Neutral-axis offsets a_t, a_c
    NeutralAxis,
    /// Effective bending stiffness
    Stiffness,
    /// Mid-span moment and support shear
    InternalForces,
    /// Deflection curve
    Deflections,
    /// Stresses and layer forces
    Stresses,
    /// Utilization checks
    DesignChecks,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::SectionProperties => "Section Properties",
            EquationCategory::ConnectionEfficiency => "Connection Efficiency",
            EquationCategory::NeutralAxis => "Neutral Axis",
            EquationCategory::Stiffness => "Effective Stiffness",
            EquationCategory::InternalForces => "Internal Forces",
            EquationCategory::Deflections => "Deflections",
            EquationCategory::Stresses => "Stresses",
            EquationCategory::DesignChecks => "Design Checks",
        }
    }

    /// Sort order (lower = earlier in the pipeline)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::SectionProperties => 1,
            EquationCategory::ConnectionEfficiency => 2,
            EquationCategory::NeutralAxis => 3,
            EquationCategory::Stiffness => 4,
            EquationCategory::InternalForces => 5,
            EquationCategory::Deflections => 6,
            EquationCategory::Stresses => 7,
            EquationCategory::DesignChecks => 8,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "E_c", "k_ser")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// SI units (e.g., "Pa", "N/m")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for one equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in LaTeX math notation
    pub formula_latex: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations used by the TCC calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    /// A = b·h
    RectangularArea,
    /// I = b·h³/12
    RectangularMomentOfInertia,
    /// γ = 1 / (1 + π²·E_c·A_c·s / (k·L²))
    GammaFactor,
    /// a_t = γ·E_c·A_c·(h_c + h_t) / (2·(γ·E_c·A_c + E_t·A_t))
    TimberNeutralAxis,
    /// a_c = h_t/2 − a_t + h_c/2
    ConcreteNeutralAxis,
    /// EI_eff = Σ(E·I + γ·E·A·a²)
    EffectiveBendingStiffness,
    /// M = PL/4
    MidspanMoment,
    /// V = P/2
    MidspanShear,
    /// δ(x) = (P·x³/12 − P·L²·x/16) / EI_eff
    MidspanDeflection,
    /// σ = γ·E·a·M / EI_eff
    AxialStress,
    /// σ_m = 0.5·E·h·M / EI_eff
    BendingStress,
    /// N_c = σ_c·A_c
    ConcreteNormalForce,
    /// M_c = E_c·I_c·M / EI_eff
    LayerMoment,
    /// τ_max = 0.5·E_t·h²·V / EI_eff
    TimberMaxShearStress,
    /// F = γ·E_c·A_c·a_c·s·V / EI_eff
    ConnectorForce,
    /// η = σ_m/f_m + σ_t/f_t
    TimberUtilization,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::RectangularArea => EquationMetadata {
                name: "Rectangular Area",
                description: "Cross-sectional area of the timber member or concrete slab",
                formula_latex: r"A = b\,h",
                formula_plain: "A = b * h",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("b", "Width of section", "m"),
                    Variable::new("h", "Height of section", "m"),
                    Variable::new("A", "Area", "m^2"),
                ],
                assumptions: vec!["Solid rectangular section"],
                category: EquationCategory::SectionProperties,
                source_module: "equations/section.rs",
                source_function: "rectangular_area",
            },

            Equation::RectangularMomentOfInertia => EquationMetadata {
                name: "Rectangular Second Moment of Area",
                description: "Second moment of area of a layer about its own centroid",
                formula_latex: r"I = \frac{b\,h^3}{12}",
                formula_plain: "I = b * h^3 / 12",
                reference: CodeReference::Roarks { edition: 8, table: "Table A.1", case: "1" },
                variables: vec![
                    Variable::new("b", "Width of section", "m"),
                    Variable::new("h", "Height of section", "m"),
                    Variable::new("I", "Second moment of area", "m^4"),
                ],
                assumptions: vec!["Bending about the horizontal centroidal axis"],
                category: EquationCategory::SectionProperties,
                source_module: "equations/section.rs",
                source_function: "rectangular_moment_of_inertia",
            },

            Equation::GammaFactor => EquationMetadata {
                name: "Connection Efficiency Factor",
                description: "Reduction of the concrete contribution for connector slip",
                formula_latex: r"\gamma_c = \frac{1}{1 + \frac{\pi^2\,E_c\,A_c\,s}{k_{ser}\,L^2}}",
                formula_plain: "gamma_c = 1 / (1 + pi^2 * E_c * A_c * s / (k_ser * L^2))",
                reference: CodeReference::Eurocode5 { clause: "Annex B, Eq. (B.5)" },
                variables: vec![
                    Variable::new("E_c", "Elastic modulus of concrete", "Pa"),
                    Variable::new("A_c", "Area of concrete slab", "m^2"),
                    Variable::new("s", "Connector spacing", "m"),
                    Variable::new("k_ser", "Slip modulus per connector", "N/m"),
                    Variable::new("L", "Span length", "m"),
                ],
                assumptions: vec![
                    "Uniform connector spacing",
                    "Sinusoidal moment distribution approximated by the span length",
                ],
                category: EquationCategory::ConnectionEfficiency,
                source_module: "equations/composite.rs",
                source_function: "gamma_factor",
            },

            Equation::TimberNeutralAxis => EquationMetadata {
                name: "Timber Neutral-Axis Offset",
                description: "Distance from the timber centroid to the composite neutral axis",
                formula_latex: concat!(
                    r"a_t = \frac{\gamma_c\,E_c\,A_c\,(h_c + h_t)}",
                    r"{2\left(\gamma_c\,E_c\,A_c + E_t\,A_t\right)}"
                ),
                formula_plain: concat!(
                    "a_t = gamma_c * E_c * A_c * (h_c + h_t)",
                    " / (2 * (gamma_c * E_c * A_c + E_t * A_t))"
                ),
                reference: CodeReference::Eurocode5 { clause: "Annex B, Eq. (B.6)" },
                variables: vec![
                    Variable::new("E_t", "Elastic modulus of timber", "Pa"),
                    Variable::new("A_t", "Area of timber member", "m^2"),
                    Variable::new("h_t", "Height of timber member", "m"),
                    Variable::new("h_c", "Height of concrete slab", "m"),
                    Variable::new("a_t", "Timber centroid to neutral axis", "m"),
                ],
                assumptions: vec![
                    "Layers in direct contact (no gap)",
                    "Timber is the reference layer (gamma_t = 1)",
                ],
                category: EquationCategory::NeutralAxis,
                source_module: "equations/composite.rs",
                source_function: "timber_neutral_axis_offset",
            },

            Equation::ConcreteNeutralAxis => EquationMetadata {
                name: "Concrete Neutral-Axis Offset",
                description: "Distance from the concrete centroid to the composite neutral axis",
                formula_latex: r"a_c = \frac{h_t}{2} - a_t + \frac{h_c}{2}",
                formula_plain: "a_c = h_t/2 - a_t + h_c/2",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("a_t", "Timber centroid to neutral axis", "m"),
                    Variable::new("a_c", "Concrete centroid to neutral axis", "m"),
                ],
                assumptions: vec!["Layers in direct contact (no gap)"],
                category: EquationCategory::NeutralAxis,
                source_module: "equations/composite.rs",
                source_function: "concrete_neutral_axis_offset",
            },

            Equation::EffectiveBendingStiffness => EquationMetadata {
                name: "Effective Bending Stiffness",
                description: "Bending stiffness of the partially composite section",
                formula_latex: concat!(
                    r"EI_{eff} = E_t\,I_t + E_c\,I_c",
                    r" + E_t\,A_t\,a_t^2 + \gamma_c\,E_c\,A_c\,a_c^2"
                ),
                formula_plain: "EI_eff = E_t*I_t + E_c*I_c + E_t*A_t*a_t^2 + gamma_c*E_c*A_c*a_c^2",
                reference: CodeReference::Eurocode5 { clause: "Annex B, Eq. (B.1)" },
                variables: vec![
                    Variable::new("I_t", "Second moment of area of timber", "m^4"),
                    Variable::new("I_c", "Second moment of area of concrete", "m^4"),
                    Variable::new("EI_eff", "Effective bending stiffness", "N*m^2"),
                ],
                assumptions: vec!["Linear elastic layers", "Plane sections within each layer"],
                category: EquationCategory::Stiffness,
                source_module: "equations/composite.rs",
                source_function: "effective_bending_stiffness",
            },

            Equation::MidspanMoment => EquationMetadata {
                name: "Mid-Span Moment",
                description: "Bending moment under a point load at mid-span",
                formula_latex: r"M_{mid} = \frac{P\,L}{4}",
                formula_plain: "M_mid = P*L/4",
                reference: CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "1a" },
                variables: vec![
                    Variable::new("P", "Point load", "N"),
                    Variable::new("L", "Span length", "m"),
                    Variable::new("M_mid", "Mid-span bending moment", "N*m"),
                ],
                assumptions: vec!["Simply supported single span", "Load at mid-span"],
                category: EquationCategory::InternalForces,
                source_module: "equations/beam.rs",
                source_function: "midspan_point_load_moment",
            },

            Equation::MidspanShear => EquationMetadata {
                name: "Maximum Shear",
                description: "Support shear under a point load at mid-span",
                formula_latex: r"V_{max} = \frac{P}{2}",
                formula_plain: "V_max = P/2",
                reference: CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "1a" },
                variables: vec![
                    Variable::new("P", "Point load", "N"),
                    Variable::new("V_max", "Maximum shear force", "N"),
                ],
                assumptions: vec!["Simply supported single span", "Load at mid-span"],
                category: EquationCategory::InternalForces,
                source_module: "equations/beam.rs",
                source_function: "midspan_point_load_shear",
            },

            Equation::MidspanDeflection => EquationMetadata {
                name: "Deflection Curve",
                description: "Vertical deflection along the left half-span, mirrored on the right",
                formula_latex: concat!(
                    r"\delta(x) = \frac{1}{EI_{eff}}",
                    r"\left(\frac{P\,x^3}{12} - \frac{P\,L^2\,x}{16}\right)"
                ),
                formula_plain: "delta(x) = (P*x^3/12 - P*L^2*x/16) / EI_eff, 0 <= x <= L/2",
                reference: CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "1a" },
                variables: vec![
                    Variable::new("x", "Position from left support", "m"),
                    Variable::new("delta", "Deflection (negative downward)", "m"),
                ],
                assumptions: vec!["Small deflections", "Shear deformation neglected"],
                category: EquationCategory::Deflections,
                source_module: "equations/beam.rs",
                source_function: "midspan_point_load_deflection",
            },

            Equation::AxialStress => EquationMetadata {
                name: "Axial Stress",
                description: "Normal stress at a layer centroid from composite action",
                formula_latex: r"\sigma_i = \frac{\gamma_i\,E_i\,a_i\,M}{EI_{eff}}",
                formula_plain: "sigma_i = gamma_i * E_i * a_i * M / EI_eff",
                reference: CodeReference::Eurocode5 { clause: "Annex B, Eq. (B.7)" },
                variables: vec![
                    Variable::new("gamma_i", "Layer efficiency factor (1 for timber)", "-"),
                    Variable::new("a_i", "Layer centroid to neutral axis", "m"),
                    Variable::new("sigma_i", "Axial stress", "Pa"),
                ],
                assumptions: vec!["Timber in tension, concrete in compression under sagging"],
                category: EquationCategory::Stresses,
                source_module: "equations/stress.rs",
                source_function: "axial_stress",
            },

            Equation::BendingStress => EquationMetadata {
                name: "Bending Stress",
                description: "Extreme-fibre stress of a layer bending about its own centroid",
                formula_latex: r"\sigma_{m,i} = \frac{0.5\,E_i\,h_i\,M}{EI_{eff}}",
                formula_plain: "sigma_m_i = 0.5 * E_i * h_i * M / EI_eff",
                reference: CodeReference::Eurocode5 { clause: "Annex B, Eq. (B.8)" },
                variables: vec![
                    Variable::new("h_i", "Layer height", "m"),
                    Variable::new("sigma_m_i", "Bending stress", "Pa"),
                ],
                assumptions: vec!["Linear stress distribution within each layer"],
                category: EquationCategory::Stresses,
                source_module: "equations/stress.rs",
                source_function: "bending_stress",
            },

            Equation::ConcreteNormalForce => EquationMetadata {
                name: "Concrete Normal Force",
                description: "Axial force resultant in the concrete slab",
                formula_latex: r"N_c = \sigma_c\,A_c",
                formula_plain: "N_c = sigma_c * A_c",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("sigma_c", "Concrete axial stress", "Pa"),
                    Variable::new("N_c", "Concrete normal force", "N"),
                ],
                assumptions: vec!["Uniform axial stress over the slab"],
                category: EquationCategory::Stresses,
                source_module: "calculations/tcc.rs",
                source_function: "compute_result_set",
            },

            Equation::LayerMoment => EquationMetadata {
                name: "Concrete Internal Moment",
                description: "Moment carried by the concrete slab about its own centroid",
                formula_latex: r"M_c = \frac{E_c\,I_c\,M}{EI_{eff}}",
                formula_plain: "M_c = E_c * I_c * M / EI_eff",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("M", "Mid-span bending moment", "N*m"),
                    Variable::new("M_c", "Concrete internal moment", "N*m"),
                ],
                assumptions: vec!["Equal curvature in both layers"],
                category: EquationCategory::Stresses,
                source_module: "equations/stress.rs",
                source_function: "layer_moment",
            },

            Equation::TimberMaxShearStress => EquationMetadata {
                name: "Maximum Timber Shear Stress",
                description: "Peak timber shear stress at the critical height, per unit width",
                formula_latex: concat!(
                    r"\tau_{t,max} = \frac{0.5\,E_t\,h^2\,V_{max}}{EI_{eff}},",
                    r"\quad h = a_t + 0.5\,h_t"
                ),
                formula_plain: "tau_max = 0.5 * E_t * h^2 * V_max / EI_eff, h = a_t + 0.5*h_t",
                reference: CodeReference::Eurocode5 { clause: "Annex B, Eq. (B.9)" },
                variables: vec![
                    Variable::new("h", "Shear-critical height above timber base", "m"),
                    Variable::new("V_max", "Maximum shear force", "N"),
                    Variable::new("tau_max", "Maximum shear stress", "Pa"),
                ],
                assumptions: vec!["Width-independent form (not divided by b_t)"],
                category: EquationCategory::Stresses,
                source_module: "equations/stress.rs",
                source_function: "timber_max_shear_stress",
            },

            Equation::ConnectorForce => EquationMetadata {
                name: "Connector Force",
                description: "Shear force transmitted by one connector near the support",
                formula_latex: r"F = \frac{\gamma_c\,E_c\,A_c\,a_c\,s}{EI_{eff}}\,V_{max}",
                formula_plain: "F = gamma_c * E_c * A_c * a_c * s * V_max / EI_eff",
                reference: CodeReference::Eurocode5 { clause: "Annex B, Eq. (B.10)" },
                variables: vec![
                    Variable::new("s", "Connector spacing", "m"),
                    Variable::new("F", "Force per connector", "N"),
                ],
                assumptions: vec!["Uniform connector spacing equal to s"],
                category: EquationCategory::Stresses,
                source_module: "equations/stress.rs",
                source_function: "connector_force",
            },

            Equation::TimberUtilization => EquationMetadata {
                name: "Timber Utilization",
                description: "Linear interaction of bending and tension in the timber",
                formula_latex: r"\eta_t = \frac{\sigma_{m,t}}{f_{m}} + \frac{\sigma_t}{f_{t}}",
                formula_plain: "eta_t = sigma_m_t / f_m + sigma_t / f_t",
                reference: CodeReference::Eurocode5 { clause: "6.2.3, Eq. (6.17)" },
                variables: vec![
                    Variable::new("f_m", "Bending strength of timber", "Pa"),
                    Variable::new("f_t", "Tensile strength of timber", "Pa"),
                    Variable::new("eta_t", "Utilization ratio", "-"),
                ],
                assumptions: vec![
                    "Characteristic strengths used directly",
                    "No k_mod, partial safety or service-class factors applied",
                ],
                category: EquationCategory::DesignChecks,
                source_module: "equations/stress.rs",
                source_function: "timber_utilization",
            },
        }
    }

    /// Get all equations in a specific category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories in pipeline order
    pub fn all_categories() -> Vec<EquationCategory> {
        let mut categories = vec![
            EquationCategory::SectionProperties,
            EquationCategory::ConnectionEfficiency,
            EquationCategory::NeutralAxis,
            EquationCategory::Stiffness,
            EquationCategory::InternalForces,
            EquationCategory::Deflections,
            EquationCategory::Stresses,
            EquationCategory::DesignChecks,
        ];
        categories.sort_by_key(|c| c.sort_order());
        categories
    }
}

/// All registered equations, in pipeline order.
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::RectangularArea,
    Equation::RectangularMomentOfInertia,
    Equation::GammaFactor,
    Equation::TimberNeutralAxis,
    Equation::ConcreteNeutralAxis,
    Equation::EffectiveBendingStiffness,
    Equation::MidspanMoment,
    Equation::MidspanShear,
    Equation::MidspanDeflection,
    Equation::AxialStress,
    Equation::BendingStress,
    Equation::ConcreteNormalForce,
    Equation::LayerMoment,
    Equation::TimberMaxShearStress,
    Equation::ConnectorForce,
    Equation::TimberUtilization,
];

/// The equations that make up the stiffness derivation (the report's
/// "Gamma Method Formulas" block).
pub fn gamma_method_equations() -> Vec<Equation> {
    vec![
        Equation::GammaFactor,
        Equation::TimberNeutralAxis,
        Equation::ConcreteNeutralAxis,
        Equation::EffectiveBendingStiffness,
    ]
}

/// Generate a markdown reference of every registered equation.
pub fn generate_equations_markdown() -> String {
    let mut output = String::new();

    output.push_str("# TCC Equations Reference\n\n");
    output.push_str("> Auto-generated from source code. Do not edit manually.\n\n");

    output.push_str(
        r#"## Sign Conventions

- **Loads**: Positive downward
- **Moment**: Positive causes tension on the timber bottom fibre (sagging)
- **Deflection**: Negative downward
- **Units**: SI throughout (Pa, m, N, N*m)

"#,
    );

    let categories = Equation::all_categories();
    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for eq in equations {
            let meta = eq.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 16);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_latex.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
            assert!(!meta.source_function.is_empty(), "Equation {:?} missing source", eq);
        }

        let na = Equation::TimberNeutralAxis.metadata();
        assert!(na.formula_plain.contains("(2 * ("), "Denominator must double the whole sum");
    }

    #[test]
    fn test_code_reference_citation() {
        let ec5 = CodeReference::Eurocode5 { clause: "Annex B, Eq. (B.5)" };
        assert_eq!(ec5.citation(), "EN 1995-1-1:2004 Annex B, Eq. (B.5)");
        assert_eq!(ec5.short_form(), "EC5");

        let roark = CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "1a" };
        assert_eq!(roark.citation(), "Roark's 8ed, Table 8.1, Case 1a");
    }

    #[test]
    fn test_every_category_has_equations() {
        for category in Equation::all_categories() {
            assert!(!Equation::in_category(category).is_empty(), "{:?} is empty", category);
        }
    }

    #[test]
    fn test_categories_sorted() {
        let cats = Equation::all_categories();
        let orders: Vec<u8> = cats.iter().map(|c| c.sort_order()).collect();
        let mut sorted = orders.clone();
        sorted.sort();
        assert_eq!(orders, sorted);
    }

    #[test]
    fn test_gamma_method_equations() {
        let eqs = gamma_method_equations();
        assert_eq!(eqs.first(), Some(&Equation::GammaFactor));
        assert!(eqs.contains(&Equation::EffectiveBendingStiffness));
    }

    #[test]
    fn test_generate_equations_markdown() {
        let markdown = generate_equations_markdown();

        assert!(markdown.contains("# TCC Equations Reference"));
        assert!(markdown.contains("## Sign Conventions"));
        assert!(markdown.contains("## Connection Efficiency"));
        assert!(markdown.contains("### Effective Bending Stiffness"));
        assert!(markdown.contains("`M_mid = P*L/4`"));
        assert!(markdown.contains("`V_max = P/2`"));
        assert!(markdown.contains("EN 1995-1-1:2004 Annex B"));
        assert!(markdown.contains("equations/composite.rs"));
        assert!(markdown.contains("**Total Equations:** 16"));
        assert!(markdown.contains("**Categories:** 8"));
    }
}
