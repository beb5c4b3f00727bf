use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GradientBackgroundProps {
    #[prop_or_default]
    pub is_dark: bool,
    #[prop_or_default]
    pub children: Html,
}

/// Page backdrop: the palette's base colour plus a soft accent glow, stronger on dark palettes.
#[function_component(GradientBackground)]
pub fn gradient_background(props: &GradientBackgroundProps) -> Html {
    let glow = if props.is_dark { "opacity-40" } else { "opacity-20" };

    html! {
        <div class="relative min-h-screen">
            <div class="fixed inset-0 bg-[var(--bg)] -z-50"></div>
            <div class={classes!(
                "pointer-events-none", "fixed", "inset-x-0", "top-0", "h-[32rem]", "-z-40",
                "bg-gradient-to-b", "from-[var(--accent)]/30", "to-transparent", "blur-3xl", glow
            )}></div>
            <div class="relative z-0">
                { props.children.clone() }
            </div>
        </div>
    }
}
