/// How a declaration keyword puts its identifier into the declared set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeclarationPolicy {
    /// `var x` declares `x` as soon as the pair is seen.
    BindOnSight,
    /// `var x = ...` is required; `x` is only declared once the `=` is seen.
    /// Function declarations are exempt and always bind.
    #[default]
    RequireInitializer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierConfig {
    pub start_keyword: String,
    pub end_keyword: String,
    pub declaration_policy: DeclarationPolicy,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        VerifierConfig {
            start_keyword: String::from("Begin"),
            end_keyword: String::from("End"),
            declaration_policy: DeclarationPolicy::default(),
        }
    }
}

impl VerifierConfig {
    pub fn with_policy(mut self, declaration_policy: DeclarationPolicy) -> Self {
        self.declaration_policy = declaration_policy;
        self
    }

    pub fn with_boundaries(mut self, start_keyword: impl Into<String>, end_keyword: impl Into<String>) -> Self {
        self.start_keyword = start_keyword.into();
        self.end_keyword = end_keyword.into();
        self
    }
}
