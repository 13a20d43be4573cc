//! Accessor prefix families

/// Prefix family an identifier was captured under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prefix {
    /// `EINA_OBJ_GET_<NAME>(`
    EinaObjGetter,
    /// `GEL_APP_GET_<NAME>(`
    GelAppGetter,
    /// `eina_obj_get_<name>(`
    EinaObjFunction,
    /// `gel_app_get_<name>(`
    GelAppFunction,
    /// `EINA_OBJ_<NAME>(`
    EinaObjMacro,
    /// `GEL_APP_<NAME>(`
    GelAppMacro,
}

impl Prefix {
    /// All families in alternation order. Getter macros come before the
    /// plain macros that share their leading text.
    pub const ALL: [Prefix; 6] = [
        Prefix::EinaObjGetter,
        Prefix::GelAppGetter,
        Prefix::EinaObjFunction,
        Prefix::GelAppFunction,
        Prefix::EinaObjMacro,
        Prefix::GelAppMacro,
    ];

    /// Literal text preceding the captured identifier
    pub fn literal(&self) -> &'static str {
        match self {
            Prefix::EinaObjGetter => "EINA_OBJ_GET_",
            Prefix::GelAppGetter => "GEL_APP_GET_",
            Prefix::EinaObjFunction => "eina_obj_get_",
            Prefix::GelAppFunction => "gel_app_get_",
            Prefix::EinaObjMacro => "EINA_OBJ_",
            Prefix::GelAppMacro => "GEL_APP_",
        }
    }

    /// Capture group name used for this family
    pub fn group(&self) -> &'static str {
        match self {
            Prefix::EinaObjGetter => "eina_obj_getter",
            Prefix::GelAppGetter => "gel_app_getter",
            Prefix::EinaObjFunction => "eina_obj_function",
            Prefix::GelAppFunction => "gel_app_function",
            Prefix::EinaObjMacro => "eina_obj_macro",
            Prefix::GelAppMacro => "gel_app_macro",
        }
    }

    /// Regex fragment matching `<literal><identifier>(`
    pub(crate) fn pattern(&self) -> String {
        format!(
            r"{}(?P<{}>[A-Za-z0-9_]+)\(",
            regex::escape(self.literal()),
            self.group()
        )
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.literal())
    }
}
